//! Run lifecycle and frame pacing
//!
//! The controller is the single owner of [`RunState`]. Hosts write input
//! flags and call [`RunController::advance`] once per presented frame; the
//! controller converts real frame time into zero or more fixed ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::error::{EngineError, Result};
use crate::settings::EngineSettings;
use crate::sim::{CourseBuilder, Discipline, ProceduralCourse, RunConfig, RunResult, RunState};
use crate::snapshot::{Snapshot, TerrainSampler};

pub use crate::sim::InputFlags;

/// Lifecycle phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Configurable, nothing simulating
    Idle,
    /// Ticks advance the run
    Running,
    /// Run frozen; ticks are no-ops
    Paused,
    /// Result available until the next start/reset
    Finished,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::Paused => "paused",
            RunPhase::Finished => "finished",
        }
    }
}

/// Owns one run at a time and drives it at a fixed cadence
pub struct RunController {
    settings: EngineSettings,
    config: RunConfig,
    state: RunState,
    phase: RunPhase,
    result: Option<RunResult>,
    input: InputFlags,
    accumulator: f64,
    course_builder: Box<dyn CourseBuilder>,
}

impl RunController {
    /// Create an idle controller configured for the first level
    pub fn new(settings: EngineSettings) -> Result<Self> {
        settings.validate()?;
        let config = RunConfig::custom(Discipline::default(), settings.levels[0].clone(), 0)?;
        Ok(Self {
            settings,
            config,
            state: RunState::new(0),
            phase: RunPhase::Idle,
            result: None,
            input: InputFlags::default(),
            accumulator: 0.0,
            course_builder: Box::new(ProceduralCourse),
        })
    }

    /// Replace the course builder used at every start
    pub fn with_course_builder(mut self, builder: impl CourseBuilder + 'static) -> Self {
        self.course_builder = Box::new(builder);
        self
    }

    /// Select discipline and level for the next run
    pub fn configure(&mut self, discipline: Discipline, level_index: usize) -> Result<()> {
        self.require(
            "configure",
            matches!(self.phase, RunPhase::Idle | RunPhase::Finished),
        )?;
        let level = self.settings.levels.get(level_index).cloned().ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "level index {level_index} out of range 0..{}",
                self.settings.levels.len()
            ))
        })?;
        self.config = RunConfig::custom(discipline, level, level_index)?;
        log::info!("Configured {} on '{}'", discipline, self.config.level.name);
        Ok(())
    }

    /// Index-based variant for selector UIs
    pub fn configure_by_index(&mut self, discipline_index: usize, level_index: usize) -> Result<()> {
        let discipline = Discipline::from_index(discipline_index)?;
        self.configure(discipline, level_index)
    }

    /// Start a fresh run; returns the seed used
    ///
    /// Uses the pinned seed from settings when present, otherwise a new
    /// random seed every time.
    pub fn start(&mut self) -> Result<u64> {
        let seed = self.settings.seed.unwrap_or_else(rand::random);
        self.start_with_seed(seed)?;
        Ok(seed)
    }

    /// Start a fresh run from an explicit seed (replays)
    pub fn start_with_seed(&mut self, seed: u64) -> Result<()> {
        self.require(
            "start",
            matches!(self.phase, RunPhase::Idle | RunPhase::Finished),
        )?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let course = self
            .course_builder
            .build(&self.config.level, self.config.discipline, &mut rng);

        let mut state = RunState::new(seed);
        state.obstacles = course.obstacles;
        state.rings = course.rings;

        self.state = state;
        self.result = None;
        self.accumulator = 0.0;
        self.phase = RunPhase::Running;

        log::info!(
            "Run started: {} on '{}' with seed {} ({} obstacles, {} rings)",
            self.config.discipline,
            self.config.level.name,
            seed,
            self.state.obstacles.len(),
            self.state.rings.len()
        );
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.phase == RunPhase::Running {
            self.phase = RunPhase::Paused;
            log::info!("Paused at tick {}", self.state.time_ticks);
        } else {
            log::debug!("Ignoring pause while {}", self.phase.as_str());
        }
    }

    pub fn resume(&mut self) {
        if self.phase == RunPhase::Paused {
            // Time spent paused must not turn into a burst of ticks
            self.accumulator = 0.0;
            self.phase = RunPhase::Running;
            log::info!("Resumed at tick {}", self.state.time_ticks);
        } else {
            log::debug!("Ignoring resume while {}", self.phase.as_str());
        }
    }

    /// Pause key behaviour: flip between running and paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            RunPhase::Running => self.pause(),
            RunPhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Abort the current run and discard any result
    pub fn stop(&mut self) {
        if self.phase != RunPhase::Idle {
            log::info!("Run stopped at tick {}", self.state.time_ticks);
        }
        self.phase = RunPhase::Idle;
        self.result = None;
        self.accumulator = 0.0;
    }

    /// Return to a clean idle state, keeping the configuration
    pub fn reset(&mut self) {
        self.stop();
        self.state = RunState::new(0);
        self.input = InputFlags::default();
    }

    pub fn set_input(&mut self, input: InputFlags) {
        self.input = input;
    }

    pub fn input(&self) -> InputFlags {
        self.input
    }

    /// Feed one host frame's elapsed time; returns the number of ticks run
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        if self.phase != RunPhase::Running {
            return 0;
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.settings.max_frame_dt)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.settings.max_substeps {
            self.accumulator -= SIM_DT;
            substeps += 1;
            if self.tick().is_some() {
                self.accumulator = 0.0;
                break;
            }
        }

        if self.accumulator >= SIM_DT {
            log::warn!(
                "Dropping {:.3}s of simulation time after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Run exactly one fixed tick if running
    ///
    /// Returns the result on the tick that finishes the run, exactly once.
    pub fn tick(&mut self) -> Option<RunResult> {
        if self.phase != RunPhase::Running {
            return None;
        }

        let result = crate::sim::tick(&mut self.state, &self.config, &self.input)?;
        self.phase = RunPhase::Finished;
        self.result = Some(result);
        log::info!(
            "Run finished: {} in {:.1}s, score {}",
            if result.won { "cleared" } else { "crashed" },
            result.time,
            result.score
        );
        Some(result)
    }

    /// Terminal result; only present while finished
    pub fn result(&self) -> Option<RunResult> {
        match self.phase {
            RunPhase::Finished => self.result,
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            discipline: self.config.discipline,
            level_name: self.config.level.name.clone(),
            speed: self.state.speed,
            distance: self.state.distance,
            distance_fraction: self.state.distance_fraction(&self.config.level),
            score: self.state.score,
            health: self.state.health,
            player_vertical: self.state.vertical,
            elapsed: self.state.elapsed,
            obstacles: self.state.obstacles.clone(),
            rings: self.state.rings.clone(),
            terrain: TerrainSampler {
                seed: self.state.seed,
                bump_factor: self.config.level.bump_factor,
            },
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Read-only view of the live run state
    pub fn state(&self) -> &RunState {
        &self.state
    }

    fn require(&self, op: &'static str, allowed: bool) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                op,
                phase: self.phase.as_str(),
            })
        }
    }
}
