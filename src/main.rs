//! Trail Snake headless runner
//!
//! Plays one session with the autopilot standing in for the pointer tracker
//! and prints the final frame as JSON.
//!
//! Usage: `trail-snake [settings.json] [--ticks N]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use glam::Vec2;

use trail_snake::consts::FRAME_DT;
use trail_snake::sim::{Autopilot, GameEvent, GameState, TickInput, tick};
use trail_snake::{FrameView, Settings};

/// One minute at the simulated frame rate
const DEFAULT_TICKS: u32 = 3600;
/// Autopilot speed in pixels per tick
const PILOT_SPEED: f32 = 9.0;

struct Args {
    settings: Option<PathBuf>,
    ticks: u32,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        settings: None,
        ticks: DEFAULT_TICKS,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = iter.next().context("--ticks needs a value")?;
                args.ticks = value
                    .parse()
                    .with_context(|| format!("invalid tick count: {value}"))?;
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            path => args.settings = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Trail Snake (headless) starting...");

    let args = parse_args()?;
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {} ({} mode)", seed, settings.mode.as_str());

    let mut levels = settings.level_manager();
    let mut state = GameState::new(&settings, seed, levels.current().food_size);

    let pf = settings.playfield;
    let start = Vec2::new((pf.min_x + pf.max_x) / 2.0, (pf.min_y + pf.max_y) / 2.0);
    let mut pilot = Autopilot::new(start, PILOT_SPEED);

    let mut elapsed = 0.0;
    for _ in 0..args.ticks {
        let input = TickInput {
            head: Some(pilot.steer(&state, levels.current())),
            restart: false,
            time_up: settings.mode.is_expired(elapsed),
        };

        for event in tick(&mut state, &mut levels, &input) {
            match event {
                GameEvent::AteFood { score } => log::debug!("Ate food, score {}", score),
                other => log::info!("{:?}", other),
            }
        }

        if state.game_over {
            break;
        }
        elapsed += FRAME_DT;
    }

    let view = FrameView::capture(&state, &levels, settings.mode, elapsed);
    for line in view.hud_lines() {
        log::info!("{}", line);
    }

    let json = serde_json::to_string_pretty(&view).context("serializing final frame")?;
    println!("{json}");
    Ok(())
}
