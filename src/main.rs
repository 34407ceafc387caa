//! chargeshot demo entry point.
//!
//! Opens a raylib window with one player-owned launcher. Hold Space or the
//! left mouse button to charge, aim with the mouse, release to fire. The
//! predicted arc is drawn while charging; F11 toggles the debug overlay.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run -- --config my.ini
//! cargo run -- --write-config            # dump defaults to ./config.ini
//! cargo run -- --predict 300,-400        # headless JSON trajectory dump
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::{Camera2D, Vector2};
use std::path::PathBuf;

use chargeshot::components::launcher::LauncherSounds;
use chargeshot::events::audio::AudioCmd;
use chargeshot::game;
use chargeshot::resources::audio::{setup_audio, shutdown_audio};
use chargeshot::resources::camera2d::Camera2DRes;
use chargeshot::resources::gameconfig::GameConfig;
use chargeshot::resources::input::InputState;
use chargeshot::systems::input::{update_aim_point, update_input_state};
use chargeshot::systems::render::render_system;
use chargeshot::trajectory::TrajectoryDump;

const CHARGE_FX: &str = "charge";
const RELEASE_FX: &str = "release";

/// Charge-and-release projectile launcher with trajectory preview.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to load (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Print the predicted trajectory for a launch velocity "VX,VY" as JSON
    /// and exit. No window is opened.
    #[arg(long, value_name = "VX,VY", allow_hyphen_values = true)]
    predict: Option<String>,

    /// Number of points for --predict (default: prediction_steps).
    #[arg(long, value_name = "N")]
    steps: Option<usize>,
}

fn parse_velocity(text: &str) -> Result<Vector2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected VX,VY, got '{}'", text))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|e| format!("bad VX '{}': {}", x, e))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|e| format!("bad VY '{}': {}", y, e))?;
    Ok(Vector2 { x, y })
}

fn predict_to_stdout(config: &GameConfig, velocity: &str, steps: Option<usize>) -> Result<(), String> {
    let velocity = parse_velocity(velocity)?;
    let params = config
        .physics
        .ballistic_params(config.projectile.gravity_scale, config.projectile.drag);
    let steps = steps.unwrap_or(config.tuning.prediction_steps);
    let dump = TrajectoryDump::capture(Vector2 { x: 0.0, y: 0.0 }, velocity, &params, steps);
    let json = serde_json::to_string_pretty(&dump).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // Early-exit: headless prediction dump (no window/audio needed)
    if let Some(velocity) = &cli.predict {
        if let Err(e) = predict_to_stdout(&config, velocity, cli.steps) {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("chargeshot")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_world(&mut world, &config);
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vector2 {
            x: window_width as f32 * 0.5,
            y: window_height as f32 * 0.5,
        },
        target: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Init audio
    setup_audio(&mut world);
    for (id, path) in [
        (CHARGE_FX, "./assets/audio/charge.wav"),
        (RELEASE_FX, "./assets/audio/release.wav"),
    ] {
        world
            .resource_mut::<Messages<AudioCmd>>()
            .write(AudioCmd::LoadFx {
                id: id.to_string(),
                path: path.to_string(),
            });
    }

    game::register_observers(&mut world);
    let (_player, _launcher) = game::spawn_player_and_launcher(
        &mut world,
        &config,
        Vector2 {
            x: -(window_width as f32) * 0.35,
            y: window_height as f32 * 0.25,
        },
        LauncherSounds::new(vec![CHARGE_FX.to_string()], vec![RELEASE_FX.to_string()]),
    );

    let mut input = Schedule::default();
    input.add_systems((update_input_state, update_aim_point));
    let mut fixed = game::build_fixed_schedule();
    let mut frame = game::build_frame_schedule(true);
    let mut draw = Schedule::default();
    draw.add_systems(render_system);

    info!("Entering main loop");
    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.just_pressed
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();

        input.run(&mut world);
        game::advance_frame(&mut world, &mut fixed, &mut frame, dt);
        draw.run(&mut world);
    }
    shutdown_audio(&mut world);
}
