use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use island_app::cli::Args;
use island_app::error::AppError;
use island_app::{game_loop, logging};
use island_sim::SimConfig;

fn run(args: &Args) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::default(),
    };

    let snapshot = if args.realtime {
        game_loop::run_realtime(config, Duration::try_from_secs_f64(args.seconds)?)?
    } else {
        game_loop::run_headless(config, args.seconds)
    };

    info!(
        "session ended at {}s: {:?}, wave {}, {} resources, {} enemies on the field",
        snapshot.clock_secs,
        snapshot.phase,
        snapshot.wave.number,
        snapshot.resources,
        snapshot.enemies.len()
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
