//! Course generation
//!
//! Places obstacles (and rings for airborne disciplines) along the course
//! once per run. A cursor walks forward in random strides, so insertion
//! order is position order.

use rand::Rng;
use rand_pcg::Pcg32;

use super::discipline::Discipline;
use super::level::Level;
use super::state::{Obstacle, ObstacleKind, Ring};

/// First cursor position; keeps the start of the run clear
pub const COURSE_START: f64 = 200.0;
/// Cursor stride range [min, min + span)
pub const STRIDE_MIN: f64 = 60.0;
pub const STRIDE_SPAN: f64 = 120.0;
/// Base obstacle probability per stride before density scaling
pub const OBSTACLE_CHANCE: f64 = 0.35;
/// Ring probability per stride (airborne only)
pub const RING_CHANCE: f64 = 0.18;

/// Obstacles and rings for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    pub obstacles: Vec<Obstacle>,
    pub rings: Vec<Ring>,
}

/// Source of a run's course
///
/// The controller calls this exactly once per `start()`.
pub trait CourseBuilder {
    fn build(&mut self, level: &Level, discipline: Discipline, rng: &mut Pcg32) -> Course;
}

/// Random course following the level's obstacle density
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralCourse;

impl CourseBuilder for ProceduralCourse {
    fn build(&mut self, level: &Level, discipline: Discipline, rng: &mut Pcg32) -> Course {
        let density = level.obstacle_density * discipline.density_modifier();
        let with_rings = discipline.is_airborne();
        let mut course = Course::default();

        let mut x = COURSE_START;
        while x < level.length {
            if rng.random::<f64>() < OBSTACLE_CHANCE * density {
                let size = 12.0 + rng.random::<f64>() * 24.0;
                let kind = if rng.random::<f64>() < 0.5 {
                    ObstacleKind::Tree
                } else {
                    ObstacleKind::Rock
                };
                course.obstacles.push(Obstacle {
                    position: x,
                    size,
                    kind,
                });
            }

            if with_rings && rng.random::<f64>() < RING_CHANCE {
                course.rings.push(Ring {
                    position: x,
                    vertical: 200.0 + rng.random::<f64>() * 220.0,
                    radius: 18.0 + rng.random::<f64>() * 10.0,
                    passed: false,
                });
            }

            x += STRIDE_MIN + rng.random::<f64>() * STRIDE_SPAN;
        }

        log::debug!(
            "Built course for {} on '{}': {} obstacles, {} rings",
            discipline,
            level.name,
            course.obstacles.len(),
            course.rings.len()
        );
        course
    }
}

/// Obstacle-free course (practice runs and replay tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCourse;

impl CourseBuilder for EmptyCourse {
    fn build(&mut self, _level: &Level, _discipline: Discipline, _rng: &mut Pcg32) -> Course {
        Course::default()
    }
}
