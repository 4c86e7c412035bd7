//! Snow Rider headless harness
//!
//! Plays one run with a simple autopilot at a fixed frame rate and prints
//! the result as JSON. Useful for balancing levels and replaying seeds.
//!
//! Usage: snow-rider [DISCIPLINE] [LEVEL] [SEED] [--settings PATH] [--steer left|right]

use clap::{Parser, ValueEnum};
use snow_rider::sim::{Discipline, RunState};
use snow_rider::{EngineError, EngineSettings, InputFlags, RunController, RunPhase};
use std::path::PathBuf;

/// Host frame time used by the harness (slightly uneven on purpose)
const FRAME_TIMES: [f64; 3] = [1.0 / 60.0, 1.0 / 55.0, 1.0 / 65.0];
/// Give up after this many frames (10 minutes at 60 Hz)
const MAX_FRAMES: usize = 36_000;

#[derive(Parser, Debug)]
#[command(name = "snow-rider")]
#[command(about = "Play one Snow Rider run on autopilot and print the result as JSON")]
struct Cli {
    /// ski, snowboard, wingsuit, parachute or sled
    #[arg(default_value = "snowboard", value_parser = Discipline::from_str)]
    discipline: Discipline,
    /// Level number, starting at 1
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    level: u8,
    /// Course seed (random when omitted and not pinned by settings)
    seed: Option<u64>,
    /// JSON settings file (substep cap, frame clamp, seed, level table)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Steering held on the ground or in the air
    #[arg(long, value_enum, default_value_t = Steer::None)]
    steer: Steer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Steer {
    None,
    Left,
    Right,
}

impl Cli {
    fn level_index(&self) -> usize {
        usize::from(self.level) - 1
    }
}

/// Jump over the next obstacle on the ground; in the air, chase the next
/// unpassed ring or hold mid-band
fn autopilot(state: &RunState, discipline: Discipline, steer: Steer) -> InputFlags {
    let mut input = InputFlags {
        left: steer == Steer::Left,
        right: steer == Steer::Right,
        boost: false,
    };

    if discipline.is_airborne() {
        let target = state
            .rings
            .iter()
            .find(|r| !r.passed && r.position > state.distance)
            .map(|r| r.vertical)
            .unwrap_or(300.0);
        input.boost = state.vertical > target;
    } else {
        input.boost = state
            .obstacles
            .iter()
            .any(|o| o.position > state.distance && o.position - state.distance < 40.0);
    }
    input
}

fn run(cli: Cli) -> Result<(), EngineError> {
    let mut settings = match &cli.settings {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    let mut controller = RunController::new(settings)?;
    controller.configure(cli.discipline, cli.level_index())?;
    let seed = controller.start()?;
    log::info!("Harness playing seed {}", seed);

    for frame in 0..MAX_FRAMES {
        let input = autopilot(controller.state(), controller.config().discipline, cli.steer);
        controller.set_input(input);
        controller.advance(FRAME_TIMES[frame % FRAME_TIMES.len()]);

        if frame % 60 == 0 {
            let snap = controller.snapshot();
            log::debug!(
                "t={:.1}s dist={:.0}% speed={:.2} score={} health={}",
                snap.elapsed,
                snap.distance_fraction * 100.0,
                snap.speed,
                snap.score,
                snap.health
            );
        }
        if controller.phase() == RunPhase::Finished {
            break;
        }
    }

    match controller.result() {
        Some(result) => {
            let json = serde_json::json!({
                "seed": seed,
                "discipline": controller.config().discipline,
                "level": controller.config().level.name,
                "result": result,
            });
            println!("{json}");
            Ok(())
        }
        None => {
            log::warn!("Run did not finish within {} frames", MAX_FRAMES);
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Snow Rider harness starting...");

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The harness is native only; browser hosts embed the library directly
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use snow_rider::sim::{Obstacle, ObstacleKind};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["snow-rider"]).unwrap();
        assert_eq!(cli.discipline, Discipline::Snowboard);
        assert_eq!(cli.level_index(), 0);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.settings, None);
        assert_eq!(cli.steer, Steer::None);
    }

    #[test]
    fn test_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "snow-rider",
            "ski",
            "3",
            "42",
            "--settings",
            "levels.json",
            "--steer",
            "right",
        ])
        .unwrap();
        assert_eq!(cli.discipline, Discipline::Ski);
        assert_eq!(cli.level_index(), 2);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.settings, Some(PathBuf::from("levels.json")));
        assert_eq!(cli.steer, Steer::Right);
    }

    #[test]
    fn test_help_prints_usage() {
        let err = Cli::try_parse_from(["snow-rider", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["snow-rider", "luge"]).is_err());
        assert!(Cli::try_parse_from(["snow-rider", "ski", "0"]).is_err());
        assert!(Cli::try_parse_from(["snow-rider", "ski", "1", "-5"]).is_err());
        assert!(Cli::try_parse_from(["snow-rider", "ski", "1", "5", "--settings"]).is_err());
    }

    #[test]
    fn test_autopilot_holds_no_steering_by_default() {
        let state = RunState::new(0);
        let input = autopilot(&state, Discipline::Ski, Steer::None);
        assert!(!input.left && !input.right);

        let input = autopilot(&state, Discipline::Ski, Steer::Left);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_autopilot_jumps_near_obstacle() {
        let mut state = RunState::new(0);
        state.distance = 500.0;
        state.obstacles.push(Obstacle {
            position: 520.0,
            size: 20.0,
            kind: ObstacleKind::Tree,
        });
        assert!(autopilot(&state, Discipline::Sled, Steer::None).boost);

        state.obstacles[0].position = 600.0;
        assert!(!autopilot(&state, Discipline::Sled, Steer::None).boost);
    }
}
