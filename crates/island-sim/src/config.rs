//! Simulation configuration.
//!
//! Every field has a default matching the shipped game, so a config file
//! only needs to name what it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use island_core::constants::{DEFAULT_TICK_RATE, STARTING_RESOURCES};
use island_core::tuning::{CombatTuning, WaveTuning};

/// Who moves bodies between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicsMode {
    /// The engine integrates `position += velocity * dt` itself.
    #[default]
    Kinematic,
    /// A physics collaborator owns positions and reports them back as
    /// `BodyFeedback`.
    External,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Ticks per simulated second.
    pub tick_rate: u32,
    pub starting_resources: u32,
    pub physics: PhysicsMode,
    pub waves: WaveTuning,
    pub combat: CombatTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            starting_resources: STARTING_RESOURCES,
            physics: PhysicsMode::default(),
            waves: WaveTuning::default(),
            combat: CombatTuning::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_rate must be at least 1")]
    ZeroTickRate,
}

impl SimConfig {
    /// Fixed timestep in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.starting_resources, 100);
        assert_eq!(config.physics, PhysicsMode::Kinematic);
    }

    #[test]
    fn nested_overrides_keep_sibling_defaults() {
        let config = SimConfig::from_json_str(
            r#"{"tick_rate": 60, "physics": "External", "combat": {"kill_reward": 25}}"#,
        )
        .unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.physics, PhysicsMode::External);
        assert_eq!(config.combat.kill_reward, 25);
        assert_eq!(config.combat.attack_cooldown_secs, 1.0);
        assert_eq!(config.waves, WaveTuning::default());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = SimConfig::from_json_str(r#"{"tick_rate": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTickRate));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimConfig::from_json_str("{tick_rate:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimConfig::from_path("/nonexistent/island.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/island.json"));
    }
}
