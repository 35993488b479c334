//! Wave spawner finite state machine.
//!
//! `Idle → Warning → Spawning → Cooldown → Warning → …`. Timers are
//! absolute timestamps compared against the sim clock. Spawning is
//! instantaneous: the caller emits the enemies and moves straight on to
//! `Cooldown` in the same tick.

use island_core::constants::TIME_EPSILON;
use island_core::enums::WavePhase;
use island_core::tuning::WaveTuning;

/// Persistent wave spawner state, owned by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveState {
    /// Number of the most recently spawned wave (0 before the first).
    pub wave_number: u32,
    pub phase: WavePhase,
    /// Sim time at which `phase` was entered.
    pub phase_entered_secs: f64,
}

impl WaveState {
    /// Seconds spent in the current phase.
    pub fn elapsed_in_phase(&self, now_secs: f64) -> f64 {
        (now_secs - self.phase_entered_secs).max(0.0)
    }

    /// Switch phase, stamping the entry time.
    pub fn enter(&mut self, phase: WavePhase, now_secs: f64) {
        self.phase = phase;
        self.phase_entered_secs = now_secs;
    }

    /// Kick the chain off from `Idle`. Returns false (and does nothing) if
    /// the spawner is already running.
    pub fn start(&mut self, now_secs: f64) -> bool {
        if self.phase != WavePhase::Idle {
            return false;
        }
        self.enter(WavePhase::Warning, now_secs);
        true
    }

    /// True while the next wave is announced and counting down.
    pub fn incoming(&self) -> bool {
        self.phase == WavePhase::Warning
    }
}

/// Input to the wave FSM for one evaluation.
pub struct WaveContext {
    pub phase: WavePhase,
    pub elapsed_in_phase_secs: f64,
    /// Once set, no further transitions are scheduled.
    pub game_over: bool,
}

/// Output from the wave FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveUpdate {
    pub new_phase: WavePhase,
    pub phase_changed: bool,
}

/// Evaluate the FSM once. Returns the phase the spawner should be in.
pub fn evaluate(ctx: &WaveContext, tuning: &WaveTuning) -> WaveUpdate {
    let no_change = WaveUpdate {
        new_phase: ctx.phase,
        phase_changed: false,
    };

    if ctx.game_over {
        return no_change;
    }

    let due = |delay: f64| ctx.elapsed_in_phase_secs + TIME_EPSILON >= delay;

    let next = match ctx.phase {
        // Leaving Idle is an explicit game-start action, never a timer.
        WavePhase::Idle => return no_change,
        WavePhase::Warning if due(tuning.warning_secs) => WavePhase::Spawning,
        WavePhase::Spawning => WavePhase::Cooldown,
        WavePhase::Cooldown if due(tuning.cooldown_secs) => WavePhase::Warning,
        WavePhase::Warning | WavePhase::Cooldown => return no_change,
    };

    WaveUpdate {
        new_phase: next,
        phase_changed: true,
    }
}
