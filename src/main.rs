//! Mission Walk entry point.
//!
//! Runs the scene either headless (a scripted walk along the wall, logged)
//! or, when built with the `window` feature, in a raylib window.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --headless --frames 600
//! cargo run --features window
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use missionwalk::game::MissionScene;
use missionwalk::resources::gameconfig::GameConfig;
use missionwalk::resources::input::InputAction;
use missionwalk::resources::level::LevelLayout;
use missionwalk::resources::zonetracker::ZoneState;

/// Mission Walk: a friar, a wall, some doors.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON level layout. Defaults to the built-in mission wall.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Frames to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Write the effective configuration to `--config` and exit.
    #[arg(long)]
    write_config: bool,
}

fn load_config(path: PathBuf) -> GameConfig {
    let mut config = GameConfig::with_path(path);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    config
}

fn load_layout(path: Option<&PathBuf>) -> LevelLayout {
    let Some(path) = path else {
        return LevelLayout::default();
    };
    match LevelLayout::load_from_file(&path.to_string_lossy()) {
        Ok(layout) => {
            info!("level loaded from {}", path.display());
            layout
        }
        Err(e) => {
            error!("{}; using the default level", e);
            LevelLayout::default()
        }
    }
}

/// Walk right for `frames` frames, tapping every door on the way.
fn run_headless(mut scene: MissionScene, frames: u32, fps: u32) {
    let fps = fps.max(1);
    let dt = 1.0 / fps as f32;
    let mut last_zone = ZoneState::None;

    for frame in 0..frames {
        let wall_ms = u64::from(frame) * 1000 / u64::from(fps);
        let zone = scene.zone_state();
        {
            let mut input = scene.input_mut();
            input.set(InputAction::Right, true);
            // press on arrival at each door, release otherwise
            input.set(
                InputAction::Interact,
                zone != last_zone && matches!(zone, ZoneState::Near(_)),
            );
        }
        last_zone = zone;
        scene.tick(dt, wall_ms);

        if frame % fps == 0 {
            if let Some(actor) = scene.actor() {
                info!(
                    "t={}s x={:.1} y={:.1} facing={} frame={:?} zone={:?} passed={}/{}",
                    frame / fps,
                    actor.x,
                    actor.y,
                    actor.facing.as_str(),
                    scene.frame_key(),
                    scene.zone_state(),
                    scene.milestone().highest_passed,
                    scene.milestone().total,
                );
            }
        }
    }

    let bounds = scene.world_bounds();
    info!(
        "done: passed {}/{}, bounds {}..{}, walls {}, message {:?}",
        scene.milestone().highest_passed,
        scene.milestone().total,
        bounds.min_x,
        bounds.max_x,
        scene.boundary_wall_count(),
        scene.message_text(),
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.clone());
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }
    let layout = load_layout(cli.level.as_ref());
    if let Err(e) = layout.validate() {
        error!("invalid level: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "window")]
    {
        if !cli.headless {
            missionwalk::frontend::run(config, layout);
            return;
        }
    }

    #[cfg(not(feature = "window"))]
    {
        if !cli.headless {
            info!("built without the `window` feature; running headless");
        }
    }

    let fps = config.target_fps;
    let scene = MissionScene::new(config, layout);
    run_headless(scene, cli.frames, fps);
}
