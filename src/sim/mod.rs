//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (course position order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod course;
pub mod discipline;
pub mod level;
pub mod physics;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{ResolveReport, check_termination, resolve};
pub use course::{Course, CourseBuilder, EmptyCourse, ProceduralCourse};
pub use discipline::{DISCIPLINES, Discipline};
pub use level::Level;
pub use physics::integrate;
pub use state::{Obstacle, ObstacleKind, Ring, RunConfig, RunResult, RunState, terrain_seed};
pub use terrain::{ground_elevation, height_at};
pub use tick::{InputFlags, tick};
