//! Per-wave enemy profiles and spawn layout.

use std::f64::consts::TAU;

use island_core::constants::GROUND_HEIGHT;
use island_core::tuning::WaveTuning;
use island_core::types::Position;

/// Stats shared by every enemy of one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f64,
    pub speed: f64,
    pub damage: f64,
}

/// Number of enemies in wave `wave`: `min(base + wave, cap)`.
pub fn enemy_count(tuning: &WaveTuning, wave: u32) -> u32 {
    tuning
        .base_count
        .saturating_add(wave)
        .min(tuning.max_count)
}

/// Enemy stats for wave `wave`. Linear in the wave number.
pub fn enemy_stats(tuning: &WaveTuning, wave: u32) -> EnemyStats {
    let w = wave as f64;
    EnemyStats {
        health: tuning.base_health + tuning.health_per_wave * w,
        speed: tuning.base_speed + tuning.speed_per_wave * w,
        damage: tuning.base_damage + tuning.damage_per_wave * w,
    }
}

/// `count` points spread evenly on a circle of `radius` around the island
/// center. Point `i` sits at angle `TAU * i / count`, measured from +Z
/// toward +X.
pub fn spawn_ring(radius: f64, count: u32) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Position::new(radius * angle.sin(), GROUND_HEIGHT, radius * angle.cos())
        })
        .collect()
}
