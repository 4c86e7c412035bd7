//! Fixed timestep simulation tick
//!
//! Core game loop step that advances a run deterministically.

use serde::{Deserialize, Serialize};

use super::collision::{check_termination, resolve};
use super::physics::integrate;
use super::state::{RunConfig, RunResult, RunState};
use crate::consts::SIM_DT;

/// Held input flags, written by the host input adapter at any time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    /// Jump on the ground, lift in the air
    pub boost: bool,
}

impl InputFlags {
    /// -1 for left, +1 for right, 0 for neither or both
    pub fn steer(&self) -> f64 {
        let mut steer = 0.0;
        if self.left {
            steer -= 1.0;
        }
        if self.right {
            steer += 1.0;
        }
        steer
    }
}

/// Advance the run by one fixed timestep
///
/// Returns the run result on the tick that ends the run. Once the state is
/// finished this is a no-op.
pub fn tick(state: &mut RunState, config: &RunConfig, input: &InputFlags) -> Option<RunResult> {
    if state.finished {
        return None;
    }

    state.time_ticks += 1;
    state.elapsed += SIM_DT;

    integrate(state, &config.level, config.discipline, input);

    let report = resolve(state, config);
    if report.obstacles_hit > 0 || report.rings_passed > 0 {
        log::trace!("Tick {}: {:?}", state.time_ticks, report);
    }

    check_termination(state, config)
}
