//! Per-tick motion integration
//!
//! Ground disciplines ride the terrain and can jump; airborne disciplines
//! fight gravity with lift inside a fixed vertical band. Both share the
//! lagged speed approach, which gives runs their momentum feel.

use super::discipline::Discipline;
use super::level::Level;
use super::state::RunState;
use super::terrain::{ground_elevation, height_at};
use super::tick::InputFlags;
use crate::consts::{AIR_CEILING, AIR_FLOOR};

/// Fraction of the gap to target speed closed each tick
pub const SPEED_SMOOTHING: f64 = 0.05;
/// Extra target speed per unit of downhill terrain, before slope scaling
pub const SLOPE_BOOST: f64 = 0.3;
/// Ground gravity while airborne from a jump
pub const JUMP_GRAVITY: f64 = 0.55;
/// Vertical velocity set on takeoff (negative = up)
pub const JUMP_IMPULSE: f64 = -8.2;
/// Speed change per tick from weight shifting
pub const STEER_SPEED: f64 = 0.05;
/// Ground riders never drop below this speed
pub const MIN_GROUND_SPEED: f64 = 0.8;
/// Terminal fall speed while flying
pub const MAX_FALL_SPEED: f64 = 3.2;
/// Vertical drift per tick from steering while flying
pub const AIR_STEER_DRIFT: f64 = 0.6;

/// Speed the rider is pulled toward at the current position
pub fn target_speed(state: &RunState, level: &Level, discipline: Discipline) -> f64 {
    if discipline.is_airborne() {
        level.base_speed
    } else {
        let downhill = height_at(state.distance, state.seed).max(0.0);
        level.base_speed * (1.0 + downhill * SLOPE_BOOST * level.slope_factor)
    }
}

/// Advance speed, vertical motion and distance by one tick
pub fn integrate(state: &mut RunState, level: &Level, discipline: Discipline, input: &InputFlags) {
    let target = target_speed(state, level, discipline);
    state.speed += (target - state.speed) * SPEED_SMOOTHING;

    let steer = input.steer();
    if discipline.is_airborne() {
        integrate_air(state, discipline, input.boost, steer);
    } else {
        integrate_ground(state, level, input.boost);
        state.speed = (state.speed + steer * STEER_SPEED).max(MIN_GROUND_SPEED);
    }

    state.distance += state.speed * discipline.forward_multiplier();
}

fn integrate_ground(state: &mut RunState, level: &Level, jump: bool) {
    let ground = ground_elevation(state.distance, state.seed, level.bump_factor);

    if state.vertical < ground {
        // Mid-jump: fall until we meet the snow again
        state.vertical_velocity += JUMP_GRAVITY;
        state.vertical += state.vertical_velocity;
        if state.vertical >= ground {
            state.vertical = ground;
            state.vertical_velocity = 0.0;
        }
    } else {
        state.vertical = ground;
        if jump {
            state.vertical_velocity = JUMP_IMPULSE;
            state.vertical += state.vertical_velocity;
        }
    }
}

fn integrate_air(state: &mut RunState, discipline: Discipline, boost: bool, steer: f64) {
    let lift = if boost { discipline.air_lift() } else { 0.0 };
    state.vertical_velocity =
        (state.vertical_velocity + discipline.air_gravity() + lift).min(MAX_FALL_SPEED);
    state.vertical = (state.vertical + state.vertical_velocity + steer * AIR_STEER_DRIFT)
        .clamp(AIR_CEILING, AIR_FLOOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_VERTICAL;

    fn level() -> Level {
        Level::presets().remove(0)
    }

    #[test]
    fn test_speed_lags_toward_target() {
        let mut state = RunState::new(0);
        let level = level();
        integrate(&mut state, &level, Discipline::Wingsuit, &InputFlags::default());
        // One smoothing step from rest, not an instant jump to base speed
        assert!((state.speed - level.base_speed * SPEED_SMOOTHING).abs() < 1e-12);
        assert!((state.distance - state.speed * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ground_speed_floor() {
        let mut state = RunState::new(0);
        let input = InputFlags {
            left: true,
            ..Default::default()
        };
        for _ in 0..50 {
            integrate(&mut state, &level(), Discipline::Sled, &input);
            assert!(state.speed >= MIN_GROUND_SPEED);
        }
    }

    #[test]
    fn test_rider_lands_on_snow() {
        let level = level();
        let mut state = RunState::new(0);
        for _ in 0..40 {
            integrate(&mut state, &level, Discipline::Ski, &InputFlags::default());
        }
        // Free fall for 40 ticks would be moving at 22/tick by now
        assert!(state.vertical > START_VERTICAL + 40.0);
        assert!(state.vertical_velocity < 2.0);
    }

    fn grounded_at(level: &Level, distance: f64) -> RunState {
        let mut state = RunState::new(0);
        state.distance = distance;
        state.vertical = ground_elevation(distance, state.seed, level.bump_factor);
        state
    }

    #[test]
    fn test_jump_launches_same_tick() {
        let level = level();
        let mut state = grounded_at(&level, 100.0);
        let ground = state.vertical;
        let jump = InputFlags {
            boost: true,
            ..Default::default()
        };
        integrate(&mut state, &level, Discipline::Ski, &jump);
        assert_eq!(state.vertical_velocity, JUMP_IMPULSE);
        assert!((state.vertical - (ground + JUMP_IMPULSE)).abs() < 1e-9);
    }

    #[test]
    fn test_holding_jump_midair_does_not_double_jump() {
        let level = level();
        let mut state = grounded_at(&level, 300.0);
        let jump = InputFlags {
            boost: true,
            ..Default::default()
        };
        integrate(&mut state, &level, Discipline::Snowboard, &jump);
        integrate(&mut state, &level, Discipline::Snowboard, &jump);
        // Second tick applies gravity instead of a fresh impulse
        assert!((state.vertical_velocity - (JUMP_IMPULSE + JUMP_GRAVITY)).abs() < 1e-12);
    }

    #[test]
    fn test_wingsuit_terminal_fall_speed() {
        let mut state = RunState::new(0);
        for _ in 0..100 {
            integrate(&mut state, &level(), Discipline::Wingsuit, &InputFlags::default());
            assert!(state.vertical_velocity <= MAX_FALL_SPEED);
        }
        assert_eq!(state.vertical, AIR_FLOOR);
    }

    #[test]
    fn test_air_steering_drifts_vertically() {
        let level = level();
        let mut left = RunState::new(0);
        let mut right = RunState::new(0);
        let steer_left = InputFlags {
            left: true,
            ..Default::default()
        };
        let steer_right = InputFlags {
            right: true,
            ..Default::default()
        };
        integrate(&mut left, &level, Discipline::Parachute, &steer_left);
        integrate(&mut right, &level, Discipline::Parachute, &steer_right);
        assert!((right.vertical - left.vertical - 2.0 * AIR_STEER_DRIFT).abs() < 1e-9);
        assert_eq!(left.speed, right.speed);
    }
}
