//! Runner state shared between the controlling thread and the game loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use island_core::commands::PlayerCommand;
use island_core::state::GameStateSnapshot;
use island_sim::SimConfig;

use crate::error::AppError;
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared runner state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state is `Sync`
/// - `Option` covers the time before `start` is called
/// - the latest snapshot is shared with the game loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if one is already running.
    pub fn start(&self, config: SimConfig) -> Result<JoinHandle<()>, AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::LoopPanicked)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::LoopPanicked)?;
        *tx_lock = Some(cmd_tx);
        *running = true;
        Ok(handle)
    }

    /// Forward a player command to the running simulation.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send_loop_command(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the game loop to stop. The sender is kept so that a late
    /// `send` reports `LoopStopped` rather than `NotStarted`.
    pub fn shutdown(&self) -> Result<(), AppError> {
        self.send_loop_command(GameLoopCommand::Shutdown)?;
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
        Ok(())
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    fn send_loop_command(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::LoopPanicked)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::LoopStopped),
            None => Err(AppError::NotStarted),
        }
    }
}
