//! Collision detection, scoring and termination
//!
//! Runs after integration each tick. The course is one lane, so every
//! check is a pair of 1D overlap tests: horizontal against course position,
//! vertical against the snow surface or ring center.

use super::state::{RunConfig, RunResult, RunState};
use super::terrain::ground_elevation;

/// Health lost per obstacle hit
pub const HIT_DAMAGE: f64 = 18.0;
/// Forward shift applied to an obstacle once it has hit the rider
pub const KNOCKBACK_DISTANCE: f64 = 120.0;
/// Score for flying through a ring
pub const RING_SCORE: u64 = 150;

/// What happened during one resolve pass (used for logging and tests)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub obstacles_hit: u32,
    pub rings_passed: u32,
}

/// Horizontal and vertical hit half-extents for an obstacle of `size`
#[inline]
pub fn obstacle_reach(size: f64) -> (f64, f64) {
    (12.0 + size * 0.5, 22.0 + size * 0.3)
}

/// Apply damage for every obstacle the rider overlaps
///
/// A hit obstacle is pushed forward so it cannot hit again while the rider
/// is still inside its old hitbox. Two obstacles stacked closer than the
/// knockback can still both hit in one tick.
pub fn resolve_obstacles(state: &mut RunState, config: &RunConfig) -> u32 {
    let mut hits = 0;
    for obstacle in &mut state.obstacles {
        let (reach_x, reach_y) = obstacle_reach(obstacle.size);
        if (obstacle.position - state.distance).abs() >= reach_x {
            continue;
        }

        let base = ground_elevation(obstacle.position, state.seed, config.level.bump_factor);
        if (state.vertical - base).abs() < reach_y {
            state.health = (state.health - HIT_DAMAGE).max(0.0);
            log::debug!(
                "Hit {:?} at {:.1}, health now {}",
                obstacle.kind,
                obstacle.position,
                state.health
            );
            obstacle.position += KNOCKBACK_DISTANCE;
            hits += 1;
        }
    }
    hits
}

/// Latch every ring the rider is inside and award its score
pub fn resolve_rings(state: &mut RunState) -> u32 {
    let mut passed = 0;
    for ring in state.rings.iter_mut().filter(|r| !r.passed) {
        let inside = (ring.position - state.distance).abs() < ring.radius
            && (state.vertical - ring.vertical).abs() < ring.radius;
        if inside {
            ring.passed = true;
            state.score += RING_SCORE;
            passed += 1;
            log::debug!("Ring passed at {:.1}", ring.position);
        }
    }
    passed
}

/// Passive score for carrying speed
pub fn award_speed_score(state: &mut RunState) {
    state.score += (state.speed * 2.0).floor() as u64;
}

/// Decide whether the run just ended
///
/// Crossing the finish line wins even if the same tick emptied health.
pub fn check_termination(state: &mut RunState, config: &RunConfig) -> Option<RunResult> {
    if state.finished {
        return None;
    }

    let result = if state.distance >= config.level.length {
        RunResult {
            won: true,
            time: state.elapsed,
            score: state.score + config.completion_bonus(),
        }
    } else if state.health <= 0.0 {
        RunResult {
            won: false,
            time: state.elapsed,
            score: state.score,
        }
    } else {
        return None;
    };

    state.finished = true;
    Some(result)
}

/// Full post-integration pass: hits, rings, passive score
pub fn resolve(state: &mut RunState, config: &RunConfig) -> ResolveReport {
    let obstacles_hit = resolve_obstacles(state, config);
    let rings_passed = resolve_rings(state);
    award_speed_score(state);
    ResolveReport {
        obstacles_hit,
        rings_passed,
    }
}
