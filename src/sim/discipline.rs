//! Descent disciplines and their per-mode constants

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Player's mode of descent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Ski,
    #[default]
    Snowboard,
    Wingsuit,
    Parachute,
    Sled,
}

/// All disciplines in selector order
pub const DISCIPLINES: [Discipline; 5] = [
    Discipline::Ski,
    Discipline::Snowboard,
    Discipline::Wingsuit,
    Discipline::Parachute,
    Discipline::Sled,
];

impl Discipline {
    pub fn from_index(index: usize) -> Result<Self> {
        DISCIPLINES.get(index).copied().ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "discipline index {index} out of range 0..{}",
                DISCIPLINES.len()
            ))
        })
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ski" => Ok(Discipline::Ski),
            "snowboard" | "board" => Ok(Discipline::Snowboard),
            "wingsuit" => Ok(Discipline::Wingsuit),
            "parachute" => Ok(Discipline::Parachute),
            "sled" => Ok(Discipline::Sled),
            _ => Err(EngineError::InvalidArgument(format!("unknown discipline '{s}'"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Ski => "ski",
            Discipline::Snowboard => "snowboard",
            Discipline::Wingsuit => "wingsuit",
            Discipline::Parachute => "parachute",
            Discipline::Sled => "sled",
        }
    }

    /// Human-readable name for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Ski => "Ski",
            Discipline::Snowboard => "Snowboard",
            Discipline::Wingsuit => "Wingsuit",
            Discipline::Parachute => "Parachute",
            Discipline::Sled => "Sled",
        }
    }

    /// Player tint used by the renderer
    pub fn display_color(&self) -> &'static str {
        match self {
            Discipline::Ski => "#38bdf8",
            Discipline::Snowboard => "#22c55e",
            Discipline::Wingsuit => "#f59e0b",
            Discipline::Parachute => "#eab308",
            Discipline::Sled => "#ef4444",
        }
    }

    /// Label for the boost/jump button
    pub fn action_label(&self) -> &'static str {
        if self.is_airborne() { "Boost" } else { "Jump" }
    }

    /// Wingsuit and parachute fly; everything else rides the snow
    pub fn is_airborne(&self) -> bool {
        matches!(self, Discipline::Wingsuit | Discipline::Parachute)
    }

    /// Distance covered per unit of speed per tick
    pub fn forward_multiplier(&self) -> f64 {
        match self {
            Discipline::Wingsuit => 2.0,
            Discipline::Parachute => 1.4,
            _ => 1.6,
        }
    }

    /// Obstacle density scale applied by the course builder
    pub fn density_modifier(&self) -> f64 {
        if self.is_airborne() { 0.8 } else { 1.0 }
    }

    /// Downward acceleration while flying (airborne disciplines only)
    pub fn air_gravity(&self) -> f64 {
        match self {
            Discipline::Parachute => 0.15,
            _ => 0.30,
        }
    }

    /// Upward acceleration while boost is held (airborne disciplines only)
    pub fn air_lift(&self) -> f64 {
        match self {
            Discipline::Parachute => -0.35,
            _ => -0.55,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Discipline::from_index(0).unwrap(), Discipline::Ski);
        assert_eq!(Discipline::from_index(4).unwrap(), Discipline::Sled);
        assert!(matches!(
            Discipline::from_index(5),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for d in DISCIPLINES {
            assert_eq!(Discipline::from_str(d.as_str()).unwrap(), d);
        }
        assert_eq!(Discipline::from_str("BOARD").unwrap(), Discipline::Snowboard);
        assert!(Discipline::from_str("luge").is_err());
    }

    #[test]
    fn test_airborne_classes() {
        let airborne: Vec<_> = DISCIPLINES.iter().filter(|d| d.is_airborne()).collect();
        assert_eq!(airborne, [&Discipline::Wingsuit, &Discipline::Parachute]);
        assert_eq!(Discipline::Sled.action_label(), "Jump");
        assert_eq!(Discipline::Parachute.action_label(), "Boost");
    }
}
