//! Balancing parameters. Defaults are the shipped values; a config file
//! may override any of them.

use serde::{Deserialize, Serialize};

/// Wave timing and enemy scaling. Stats grow linearly with the wave number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    /// Countdown between the announcement and the spawn.
    pub warning_secs: f64,
    /// Quiet period after a spawn before the next announcement.
    pub cooldown_secs: f64,
    pub base_count: u32,
    pub max_count: u32,
    /// Radius of the spawn ring around the island center.
    pub spawn_radius: f64,
    pub base_health: f64,
    pub health_per_wave: f64,
    pub base_speed: f64,
    pub speed_per_wave: f64,
    pub base_damage: f64,
    pub damage_per_wave: f64,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            warning_secs: 10.0,
            cooldown_secs: 60.0,
            base_count: 3,
            max_count: 15,
            spawn_radius: 35.0,
            base_health: 50.0,
            health_per_wave: 10.0,
            base_speed: 1.0,
            speed_per_wave: 0.1,
            base_damage: 10.0,
            damage_per_wave: 2.0,
        }
    }
}

/// Attack timing, rewards and proximity damage rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Minimum time between two landed attacks from one attacker.
    pub attack_cooldown_secs: f64,
    /// How often autonomous characters look for a target.
    pub auto_attack_interval_secs: f64,
    /// Resources credited per enemy killed.
    pub kill_reward: u32,
    pub effect_duration_secs: f64,
    /// Enemies damage buildings closer than this.
    pub building_proximity: f64,
    /// Enemies and characters closer than this damage each other.
    pub character_proximity: f64,
    /// Fraction of enemy damage applied per tick while in proximity.
    pub proximity_damage_fraction: f64,
    /// Damage an enemy takes per tick per adjacent character.
    pub retaliation_chip: f64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            attack_cooldown_secs: 1.0,
            auto_attack_interval_secs: 0.5,
            kill_reward: 10,
            effect_duration_secs: 0.4,
            building_proximity: 3.0,
            character_proximity: 2.0,
            proximity_damage_fraction: 0.05,
            retaliation_chip: 0.5,
        }
    }
}
