//! Level presets (Alps to Alaska)

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A difficulty/length/terrain profile, immutable during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Finish distance
    pub length: f64,
    /// Cruising speed before terrain boost
    pub base_speed: f64,
    /// How much downhill sections accelerate ground riders
    pub slope_factor: f64,
    /// Terrain relief scale
    pub bump_factor: f64,
    /// Obstacle placement probability scale
    pub obstacle_density: f64,
}

impl Level {
    pub fn new(
        name: &str,
        length: f64,
        base_speed: f64,
        slope_factor: f64,
        bump_factor: f64,
        obstacle_density: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            length,
            base_speed,
            slope_factor,
            bump_factor,
            obstacle_density,
        }
    }

    /// The five built-in levels in increasing difficulty
    pub fn presets() -> Vec<Level> {
        vec![
            Level::new("Lv1 Alps Meadow Slope", 1200.0, 2.2, 0.9, 0.7, 0.6),
            Level::new("Lv2 Alps Steep Face", 1600.0, 2.8, 1.0, 1.0, 0.9),
            Level::new("Lv3 Alaska Powder", 2000.0, 3.2, 1.2, 1.2, 1.1),
            Level::new("Lv4 Alaska Ice Canyon", 2300.0, 3.6, 1.4, 1.4, 1.3),
            Level::new("Lv5 Alaska Storm Run (Boss)", 2600.0, 4.0, 1.6, 1.6, 1.5),
        ]
    }

    /// Reject profiles that would end a run instantly or never
    pub fn validate(&self) -> Result<()> {
        let invalid = |what: &str| {
            Err(EngineError::InvalidConfiguration(format!(
                "level '{}': {what}",
                self.name
            )))
        };

        if !self.length.is_finite() || self.length <= 0.0 {
            return invalid(&format!("length must be positive, got {}", self.length));
        }
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return invalid(&format!("base speed must be positive, got {}", self.base_speed));
        }
        for (field, value) in [
            ("slope factor", self.slope_factor),
            ("bump factor", self.bump_factor),
            ("obstacle density", self.obstacle_density),
        ] {
            if !value.is_finite() || value < 0.0 {
                return invalid(&format!("{field} must be non-negative, got {value}"));
            }
        }
        Ok(())
    }
}
