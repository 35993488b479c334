//! Simulation constants that are not balancing parameters.
//!
//! Balancing values (wave scaling, damage rates, cooldowns) live in
//! [`crate::tuning`] so they can be overridden from a config file.

use crate::types::Position;

/// Default simulation tick rate (Hz).
pub const DEFAULT_TICK_RATE: u32 = 30;

/// Tolerance used when comparing elapsed time against timer deadlines.
pub const TIME_EPSILON: f64 = 1e-9;

// --- World ---

/// Island radius in meters.
pub const ISLAND_RADIUS: f64 = 30.0;

/// Characters are kept this far inside the shoreline.
pub const ISLAND_EDGE_MARGIN: f64 = 1.0;

/// Height of a grounded body's origin.
pub const GROUND_HEIGHT: f64 = 1.0;

/// Castle location. The castle exists before the game starts.
pub const CASTLE_POSITION: Position = Position {
    x: 0.0,
    y: GROUND_HEIGHT,
    z: -5.0,
};

// --- Player movement ---

/// Base horizontal speed of the controlled character (m/s), scaled by the
/// character's own speed multiplier.
pub const BASE_MOVE_SPEED: f64 = 3.0;

/// Vertical velocity applied when a jump starts (m/s).
pub const JUMP_LAUNCH_SPEED: f64 = 6.0;

/// Vertical deceleration during a jump (m/s²).
pub const JUMP_GRAVITY: f64 = 4.0;

// --- Building ---

/// Placement grid cell size (meters).
pub const BUILD_GRID_SIZE: f64 = 2.0;

// --- Economy ---

/// Resource balance at the start of a session.
pub const STARTING_RESOURCES: u32 = 100;

// --- Camera ---

/// First-person eye height above the character origin.
pub const EYE_HEIGHT: f64 = 1.7;

/// Third-person camera offset from the character (up, behind).
pub const THIRD_PERSON_HEIGHT: f64 = 10.0;
pub const THIRD_PERSON_DISTANCE: f64 = 10.0;

/// First-person pitch is clamped to ±this value to avoid inversion.
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.1;
