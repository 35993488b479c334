use std::path::PathBuf;

use clap::Parser;

/// Run an island defense session and print the final snapshot as JSON.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file overriding simulation tuning
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulated seconds to run for
    #[arg(short, long, default_value_t = 120.0, value_parser = parse_seconds)]
    pub seconds: f64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(short, long)]
    pub realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_seconds(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a finite, non-negative duration, got {raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["island-app"]);
        assert!(args.config.is_none());
        assert_eq!(args.seconds, 120.0);
        assert!(!args.realtime);
        assert!(!args.verbose);
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "island-app",
            "--config",
            "tuning.json",
            "--seconds",
            "30",
            "--realtime",
            "-v",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("tuning.json")));
        assert_eq!(args.seconds, 30.0);
        assert!(args.realtime);
        assert!(args.verbose);
    }

    #[test]
    fn rejects_unusable_durations() {
        for raw in ["inf", "NaN", "-5", "soon"] {
            assert!(
                Args::try_parse_from(["island-app", "--seconds", raw]).is_err(),
                "{raw} should be rejected"
            );
        }
        let args = Args::try_parse_from(["island-app", "--seconds", "0"]).unwrap();
        assert_eq!(args.seconds, 0.0);
    }
}
