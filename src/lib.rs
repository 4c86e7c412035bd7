//! Snow Rider - a side-scrolling snow sports arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, course, physics, collisions)
//! - `controller`: Run lifecycle, fixed-timestep cadence, input flags
//! - `snapshot`: Read-only view handed to rendering and HUD layers
//! - `settings`: Data-driven engine configuration and level table
//!
//! Rendering, input capture and menus live in the host and only talk to
//! [`RunController`].

pub mod controller;
pub mod error;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use controller::{InputFlags, RunController, RunPhase};
pub use error::EngineError;
pub use settings::EngineSettings;
pub use snapshot::{Snapshot, TerrainSampler};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest host frame delta accepted before accumulation (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Vertical position every run starts at (screen space, larger = lower)
    pub const START_VERTICAL: f64 = 180.0;
    /// Starting and maximum health
    pub const MAX_HEALTH: f64 = 100.0;

    /// Baseline of the snow surface before terrain relief is added
    pub const GROUND_BASELINE: f64 = 260.0;
    /// Terrain relief amplitude at bump factor 1.0
    pub const GROUND_RELIEF: f64 = 40.0;

    /// Airborne vertical band
    pub const AIR_CEILING: f64 = 40.0;
    pub const AIR_FLOOR: f64 = 360.0;
}
