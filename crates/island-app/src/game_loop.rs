//! Game loop: runs the simulation engine at its tick rate and publishes
//! snapshots.
//!
//! The engine is created inside the loop thread so it never crosses a
//! thread boundary. Commands arrive via an `mpsc` channel; the latest
//! snapshot is stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{info, trace};

use island_core::commands::PlayerCommand;
use island_core::enums::GamePhase;
use island_core::state::GameStateSnapshot;
use island_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand};

/// Wall-clock duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate.max(1) as u64)
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = thread::Builder::new()
        .name("island-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick = tick_duration(config.tick_rate);
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        trace!("tick {} published", snapshot.time.tick);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind; reset rather than spiral trying to catch up.
            next_tick_time = now;
        }
    }
}

/// Run a session paced against the wall clock for `duration`, then shut
/// the loop down and return its last snapshot.
pub fn run_realtime(config: SimConfig, duration: Duration) -> Result<GameStateSnapshot, AppError> {
    let state = AppState::new();
    let handle = state.start(config)?;
    state.send(PlayerCommand::StartGame)?;
    info!("running for {:.1}s of wall time", duration.as_secs_f64());

    thread::sleep(duration);

    state.shutdown()?;
    handle.join().map_err(|_| AppError::LoopPanicked)?;
    state.snapshot().ok_or(AppError::NoSnapshot)
}

/// Run a session as fast as possible for `seconds` of simulated time, or
/// until the castle falls.
pub fn run_headless(config: SimConfig, seconds: f64) -> GameStateSnapshot {
    let ticks = (seconds.max(0.0) * config.tick_rate as f64).round() as u64;
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartGame);

    let mut snapshot = engine.tick();
    for _ in 1..ticks {
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        snapshot = engine.tick();
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use island_core::enums::WavePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration() {
        // 30Hz = 33.333ms per tick
        assert_eq!(tick_duration(30).as_nanos(), (1_000_000_000u64 / 30) as u128);
        assert_eq!(tick_duration(60), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_headless_reaches_first_wave() {
        let snapshot = run_headless(SimConfig::default(), 12.0);
        assert_eq!(snapshot.time.tick, 360);
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert_eq!(snapshot.wave.number, 1);
        assert_eq!(snapshot.wave.phase, WavePhase::Cooldown);
    }

    #[test]
    fn test_headless_respects_config() {
        let config = SimConfig::from_json_str(r#"{"waves": {"warning_secs": 2.0}}"#).unwrap();
        let snapshot = run_headless(config, 3.0);
        assert_eq!(snapshot.wave.number, 1);
        assert_eq!(snapshot.enemies.len(), 4);
    }

    #[test]
    fn test_realtime_loop_ticks_and_stops() {
        let snapshot = run_realtime(SimConfig::default(), Duration::from_millis(200)).unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick >= 1);
    }

    #[test]
    fn test_pause_resume_through_loop() {
        let state = AppState::new();
        let handle = state.start(SimConfig::default()).unwrap();
        state.send(PlayerCommand::StartGame).unwrap();
        state.send(PlayerCommand::Pause).unwrap();
        thread::sleep(Duration::from_millis(150));

        let paused = state.snapshot().unwrap();
        assert_eq!(paused.phase, GamePhase::Paused);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(state.snapshot().unwrap().time.tick, paused.time.tick);

        state.shutdown().unwrap();
        handle.join().unwrap();
    }
}
