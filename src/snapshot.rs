//! Read-only view of a run for rendering and HUD
//!
//! Built between ticks, so hosts never observe a half-applied tick.

use serde::Serialize;

use crate::controller::RunPhase;
use crate::sim::{Discipline, Obstacle, Ring, ground_elevation, height_at};

/// Terrain lookup bound to the current run's seed and relief
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerrainSampler {
    pub seed: f64,
    pub bump_factor: f64,
}

impl TerrainSampler {
    /// Raw height in [-1, 1], for background relief
    pub fn height_at(&self, x: f64) -> f64 {
        height_at(x, self.seed)
    }

    /// Snow surface elevation at course position `x`
    pub fn ground_at(&self, x: f64) -> f64 {
        ground_elevation(x, self.seed, self.bump_factor)
    }
}

/// Everything the HUD and renderer need for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: RunPhase,
    pub discipline: Discipline,
    pub level_name: String,
    pub speed: f64,
    /// Horizontal course position (camera anchor)
    pub distance: f64,
    /// Progress toward the finish, in [0, 1]
    pub distance_fraction: f64,
    pub score: u64,
    pub health: f64,
    pub player_vertical: f64,
    pub elapsed: f64,
    pub obstacles: Vec<Obstacle>,
    pub rings: Vec<Ring>,
    pub terrain: TerrainSampler,
}

impl Snapshot {
    /// Obstacles within `[from, to]`, for culling off-screen drawing
    pub fn obstacles_between(&self, from: f64, to: f64) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.position >= from && o.position <= to)
    }

    /// Rings within `[from, to]`
    pub fn rings_between(&self, from: f64, to: f64) -> impl Iterator<Item = &Ring> {
        self.rings
            .iter()
            .filter(move |r| r.position >= from && r.position <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_matches_terrain() {
        let sampler = TerrainSampler {
            seed: 31.4,
            bump_factor: 1.2,
        };
        assert_eq!(sampler.height_at(900.0), height_at(900.0, 31.4));
        assert_eq!(sampler.ground_at(900.0), ground_elevation(900.0, 31.4, 1.2));
    }
}
