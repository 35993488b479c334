//! Failures the runner reports before exiting.

use thiserror::Error;

use island_sim::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("game loop thread: {0}")]
    Io(#[from] std::io::Error),
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("game loop panicked")]
    LoopPanicked,
    #[error("no snapshot was produced")]
    NoSnapshot,
    #[error("invalid run length: {0}")]
    Duration(#[from] std::time::TryFromFloatSecsError),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
