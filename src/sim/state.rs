//! Run state and core simulation types
//!
//! Everything a tick reads or writes lives here. `RunState` is owned by the
//! controller and rebuilt from scratch at every run start.

use serde::{Deserialize, Serialize};

use super::discipline::Discipline;
use super::level::Level;
use crate::consts::*;
use crate::error::{EngineError, Result};

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Tree,
    Rock,
}

/// A static hazard standing on the snow surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal course position; shifted forward once when hit
    pub position: f64,
    pub size: f64,
    pub kind: ObstacleKind,
}

/// A collectible ring for airborne disciplines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub position: f64,
    pub vertical: f64,
    pub radius: f64,
    /// Latches true once; never reverts
    pub passed: bool,
}

/// Terminal outcome of a run, produced exactly once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub won: bool,
    /// Elapsed simulated seconds
    pub time: f64,
    pub score: u64,
}

/// Immutable selection for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub discipline: Discipline,
    pub level: Level,
    /// Position in the level table (drives the completion bonus)
    pub level_index: usize,
}

impl RunConfig {
    /// Build a config from one of the preset levels
    pub fn preset(discipline: Discipline, level_index: usize) -> Result<Self> {
        let level = Level::presets().into_iter().nth(level_index).ok_or_else(|| {
            EngineError::InvalidArgument(format!("level index {level_index} out of range"))
        })?;
        Self::custom(discipline, level, level_index)
    }

    /// Build a config from an arbitrary level profile
    pub fn custom(discipline: Discipline, level: Level, level_index: usize) -> Result<Self> {
        level.validate()?;
        Ok(Self {
            discipline,
            level,
            level_index,
        })
    }

    /// Score bonus awarded on reaching the finish
    pub fn completion_bonus(&self) -> u64 {
        500 * (self.level_index as u64 + 1)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::default(),
            level: Level::presets().remove(0),
            level_index: 0,
        }
    }
}

/// Map a run seed onto the terrain phase range [0, 1000)
pub fn terrain_seed(seed: u64) -> f64 {
    (seed % 1_000_000) as f64 / 1000.0
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Run seed for reproducibility
    pub run_seed: u64,
    /// Terrain phase derived from `run_seed`, fixed for the run
    pub seed: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed simulated seconds
    pub elapsed: f64,
    /// Horizontal progress along the course
    pub distance: f64,
    /// Screen-space vertical position (larger = lower)
    pub vertical: f64,
    pub vertical_velocity: f64,
    pub speed: f64,
    pub score: u64,
    /// Clamped to [0, 100]; never regenerates
    pub health: f64,
    /// Sorted by position
    pub obstacles: Vec<Obstacle>,
    /// Sorted by position
    pub rings: Vec<Ring>,
    pub finished: bool,
}

impl RunState {
    /// Fresh state for the given seed, with an empty course
    pub fn new(run_seed: u64) -> Self {
        Self {
            run_seed,
            seed: terrain_seed(run_seed),
            time_ticks: 0,
            elapsed: 0.0,
            distance: 0.0,
            vertical: START_VERTICAL,
            vertical_velocity: 0.0,
            speed: 0.0,
            score: 0,
            health: MAX_HEALTH,
            obstacles: Vec::new(),
            rings: Vec::new(),
            finished: false,
        }
    }

    /// Progress toward the finish line in [0, 1]
    pub fn distance_fraction(&self, level: &Level) -> f64 {
        (self.distance / level.length).clamp(0.0, 1.0)
    }
}
