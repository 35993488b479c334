use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose records the runner shows by default.
const TARGETS: [&str; 3] = ["island_app", "island_sim", "island_ai"];

/// Filter used when `RUST_LOG` is unset: warnings from dependencies, and
/// the session's own crates at info, or debug when `verbose`.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut filter = LevelFilter::Warn.to_string();
    for target in TARGETS {
        filter.push_str(&format!(",{target}={level}"));
    }
    filter.to_lowercase()
}

/// Initializes the global logger. `RUST_LOG` wins when set.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // Only fails if a logger is already installed, which happens when tests
    // call this more than once.
    let _ = builder.try_init();
}
