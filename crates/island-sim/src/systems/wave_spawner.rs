//! Wave spawner system: drives the wave FSM against the sim clock and
//! spawns each wave's enemies on the ring around the island.

use log::info;

use island_ai::profiles;
use island_ai::wave_fsm::{self, WaveContext, WaveState};
use island_core::constants::CASTLE_POSITION;
use island_core::enums::WavePhase;
use island_core::events::GameEvent;
use island_core::tuning::WaveTuning;
use island_core::types::{EntityId, Position};

use crate::registry::Registry;
use crate::world_setup;

/// Leave `Idle` and announce the first wave. Returns false if the spawner
/// was already running.
pub fn start(
    wave: &mut WaveState,
    tuning: &WaveTuning,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !wave.start(now_secs) {
        return false;
    }
    announce(wave, tuning, events);
    true
}

/// Evaluate the FSM once and carry out whatever transition it asks for.
pub fn run(
    registry: &mut Registry,
    wave: &mut WaveState,
    tuning: &WaveTuning,
    castle: EntityId,
    now_secs: f64,
    game_over: bool,
    events: &mut Vec<GameEvent>,
) {
    let update = wave_fsm::evaluate(&context(wave, now_secs, game_over), tuning);
    if !update.phase_changed {
        return;
    }
    wave.enter(update.new_phase, now_secs);

    match update.new_phase {
        WavePhase::Warning => announce(wave, tuning, events),
        WavePhase::Spawning => {
            wave.wave_number += 1;
            let target = registry
                .get::<Position>(castle)
                .unwrap_or(CASTLE_POSITION);
            let count = spawn_wave(registry, tuning, wave.wave_number, target);
            events.push(GameEvent::WaveSpawned {
                wave_number: wave.wave_number,
                enemy_count: count,
            });
            info!("wave {} spawned: {count} enemies", wave.wave_number);

            // Spawning has no duration; settle into the next phase now.
            let settled = wave_fsm::evaluate(&context(wave, now_secs, game_over), tuning);
            if settled.phase_changed {
                wave.enter(settled.new_phase, now_secs);
            }
        }
        WavePhase::Idle | WavePhase::Cooldown => {}
    }
}

/// Spawn wave `wave_number` on the ring, every enemy heading for `target`.
pub fn spawn_wave(
    registry: &mut Registry,
    tuning: &WaveTuning,
    wave_number: u32,
    target: Position,
) -> u32 {
    let count = profiles::enemy_count(tuning, wave_number);
    let stats = profiles::enemy_stats(tuning, wave_number);
    for position in profiles::spawn_ring(tuning.spawn_radius, count) {
        world_setup::spawn_enemy(registry, position, target, &stats, wave_number);
    }
    count
}

fn context(wave: &WaveState, now_secs: f64, game_over: bool) -> WaveContext {
    WaveContext {
        phase: wave.phase,
        elapsed_in_phase_secs: wave.elapsed_in_phase(now_secs),
        game_over,
    }
}

fn announce(wave: &WaveState, tuning: &WaveTuning, events: &mut Vec<GameEvent>) {
    let upcoming = wave.wave_number + 1;
    events.push(GameEvent::WaveIncoming {
        wave_number: upcoming,
        eta_secs: tuning.warning_secs,
    });
    info!("wave {upcoming} incoming in {:.0}s", tuning.warning_secs);
}
