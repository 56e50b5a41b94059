//! Crazy Cat Lady headless runner
//!
//! Drives the simulation with a scripted player for a fixed number of ticks.
//! Windowing, drawing and audio playback belong to a graphical host; this
//! binary only exercises the core and reports what happened.
//!
//! Usage: crazy-cat-lady [--seed N] [--ticks N] [--config PATH] [--dump]

use crazy_cat_lady::audio::{LogAudio, dispatch_events};
use crazy_cat_lady::consts::SIM_DT;
use crazy_cat_lady::sim::{AnimationFrames, GameState, TickInput, tick};
use crazy_cat_lady::{FixedTimestep, GameConfig};

/// Command line options
#[derive(Debug)]
struct Options {
    seed: u64,
    ticks: u64,
    config_path: Option<String>,
    dump: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 0x0CA7_CA75,
            ticks: 60 * 60,
            config_path: None,
            dump: false,
        }
    }
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value.parse().map_err(|e| format!("bad --seed: {e}"))?;
            }
            "--ticks" => {
                let value = args.next().ok_or("--ticks needs a value")?;
                options.ticks = value.parse().map_err(|e| format!("bad --ticks: {e}"))?;
            }
            "--config" => {
                options.config_path = Some(args.next().ok_or("--config needs a path")?);
            }
            "--dump" => options.dump = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

/// Walk back and forth across the world, hopping regularly
struct ScriptedPlayer {
    heading_right: bool,
}

impl ScriptedPlayer {
    fn input(&mut self, state: &GameState) -> TickInput {
        let rect = state.player.rect;
        if rect.right() >= state.config.world_width {
            self.heading_right = false;
        } else if rect.left() <= 0.0 {
            self.heading_right = true;
        }

        TickInput {
            left: !self.heading_right,
            right: self.heading_right,
            jump: state.time_ticks % 45 == 0,
            quit: false,
        }
    }
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: crazy-cat-lady [--seed N] [--ticks N] [--config PATH] [--dump]");
            std::process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => GameConfig::from_json_file(path),
        None => Ok(GameConfig::default()),
    };
    let state = config.and_then(|config| {
        // The headless runner has no sprites; the animator falls back to blank frames
        GameState::new(config, options.seed, AnimationFrames::default())
    });
    let mut state = match state {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Crazy Cat Lady (headless) starting with seed {}", options.seed);

    let mut clock = FixedTimestep::default();
    let mut player = ScriptedPlayer { heading_right: true };
    let mut audio = LogAudio::new();

    'frames: while state.time_ticks < options.ticks {
        // Pretend each rendered frame took exactly one tick
        for _ in 0..clock.advance(SIM_DT) {
            let input = player.input(&state);
            if !tick(&mut state, &input) {
                break 'frames;
            }
            dispatch_events(&state.events, &mut audio);
        }
    }
    tick(
        &mut state,
        &TickInput {
            quit: true,
            ..Default::default()
        },
    );

    log::info!(
        "Finished: {} ticks, {} cats collected, {} still waiting, {} meows",
        state.time_ticks,
        state.collected_count,
        state.population.active_count(),
        audio.played()
    );

    if options.dump {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}
