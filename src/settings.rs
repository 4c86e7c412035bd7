//! Engine settings
//!
//! Loaded from JSON by the host; every field has a default so partial
//! files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::error::{EngineError, Result};
use crate::sim::Level;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Cap on fixed ticks run per host frame
    pub max_substeps: u32,
    /// Host frame delta clamp in seconds (applied before accumulation)
    pub max_frame_dt: f64,
    /// Pin every run to this seed (replays and tests); fresh seed per run when absent
    pub seed: Option<u64>,
    /// Level table indexed by `configure`
    pub levels: Vec<Level>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,
            seed: None,
            levels: Level::presets(),
        }
    }
}

impl EngineSettings {
    /// Default settings with every run pinned to `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} levels)",
            path.display(),
            settings.levels.len()
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<()> {
        if self.max_substeps == 0 {
            return Err(EngineError::InvalidConfiguration(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        if self.levels.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "level table is empty".to_string(),
            ));
        }
        for level in &self.levels {
            level.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = EngineSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.levels.len(), 5);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = EngineSettings::from_json(r#"{ "seed": 77 }"#).unwrap();
        assert_eq!(settings.seed, Some(77));
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
        assert_eq!(settings.levels, Level::presets());
    }

    #[test]
    fn test_custom_level_table() {
        let json = r#"{
            "levels": [
                { "name": "Bunny Hill", "length": 400.0, "base_speed": 1.5,
                  "slope_factor": 0.5, "bump_factor": 0.3, "obstacle_density": 0.2 }
            ]
        }"#;
        let settings = EngineSettings::from_json(json).unwrap();
        assert_eq!(settings.levels.len(), 1);
        assert_eq!(settings.levels[0].name, "Bunny Hill");
    }

    #[test]
    fn test_degenerate_level_rejected() {
        let json = r#"{
            "levels": [
                { "name": "Nowhere", "length": 0.0, "base_speed": 1.5,
                  "slope_factor": 0.5, "bump_factor": 0.3, "obstacle_density": 0.2 }
            ]
        }"#;
        assert!(matches!(
            EngineSettings::from_json(json),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_substeps_rejected() {
        assert!(EngineSettings::from_json(r#"{ "max_substeps": 0 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineSettings::from_json("{ not json"),
            Err(EngineError::Settings(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = EngineSettings::with_seed(9);
        let json = settings.to_json().unwrap();
        assert_eq!(EngineSettings::from_json(&json).unwrap(), settings);
    }
}
