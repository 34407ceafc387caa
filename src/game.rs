//! World setup and the two-clock frame loop.
//!
//! The simulation runs on two schedules:
//!
//! - the **fixed** schedule ([`build_fixed_schedule`]) advances charging,
//!   cooldowns, projectile motion and lifetimes by exactly one physics
//!   timestep, and runs as many times per frame as [`FixedClock`] reports;
//! - the **frame** schedule ([`build_frame_schedule`]) runs once per rendered
//!   frame and drives the real-time orienter tasks and the audio queues.
//!
//! [`advance_frame`] ties both together. The binary and the integration
//! tests use the same path, the binary only adds input and drawing around it.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::chargecontroller::ChargeController;
use crate::components::launcher::{LaunchOrigin, LauncherSounds};
use crate::components::mapposition::MapPosition;
use crate::components::signals::Signals;
use crate::components::trajectorypath::TrajectoryPath;
use crate::events::launcher::{
    charge_released_audio_observer, charge_released_signals_observer,
    charge_started_audio_observer, charge_started_signals_observer, log_launcher_state_observer,
};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::aim::AimPoint;
use crate::resources::audio::init_audio_messages;
use crate::resources::fixedclock::FixedClock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::launcher::{
    advance_launcher_cooldowns, charge_launchers, launcher_input_observer,
};
use crate::systems::lifetime::lifetime_system;
use crate::systems::movement::ballistic_movement;
use crate::systems::orienter::orient_projectiles;
use crate::systems::time::update_world_time;

/// Insert the resources every world needs.
///
/// Physics settings come from `config`; the fixed clock ticks at the physics
/// timestep. The audio message queues are registered so the sound hooks can
/// write even when no audio thread runs.
pub fn init_world(world: &mut World, config: &GameConfig) {
    let physics = config.physics.normalized();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FixedClock::new(physics.timestep));
    world.insert_resource(physics);
    world.insert_resource(AimPoint::default());
    world.insert_resource(config.clone());
    init_audio_messages(world);
}

/// Register the launcher input observer, the launcher hooks and the debug
/// toggle.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(launcher_input_observer));
    world.spawn(Observer::new(charge_started_signals_observer));
    world.spawn(Observer::new(charge_released_signals_observer));
    world.spawn(Observer::new(charge_started_audio_observer));
    world.spawn(Observer::new(charge_released_audio_observer));
    world.spawn(Observer::new(log_launcher_state_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Systems that advance the simulation by one physics timestep.
pub fn build_fixed_schedule() -> Schedule {
    let mut fixed = Schedule::default();
    fixed.add_systems(
        (
            charge_launchers,
            advance_launcher_cooldowns,
            ballistic_movement,
            lifetime_system,
        )
            .chain(),
    );
    fixed
}

/// Systems that run once per rendered frame.
///
/// With `audio_bridge` the schedule also forwards commands to and polls
/// replies from the audio thread; that requires the
/// [`AudioBridge`](crate::resources::audio::AudioBridge) resource.
pub fn build_frame_schedule(audio_bridge: bool) -> Schedule {
    let mut frame = Schedule::default();
    frame.add_systems(orient_projectiles);
    if audio_bridge {
        frame.add_systems(
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                log_audio_messages,
                update_bevy_audio_messages,
            )
                .chain(),
        );
    } else {
        frame.add_systems((update_bevy_audio_cmds, update_bevy_audio_messages).chain());
    }
    frame
}

/// Advance the world by one rendered frame of `dt` real seconds.
///
/// Updates [`WorldTime`], runs the fixed schedule once per whole timestep
/// accumulated from the scaled delta, then runs the frame schedule. Returns
/// the number of fixed steps taken.
pub fn advance_frame(
    world: &mut World,
    fixed: &mut Schedule,
    frame: &mut Schedule,
    dt: f32,
) -> u32 {
    update_world_time(world, dt);
    let scaled = world.resource::<WorldTime>().delta;
    let steps = world.resource_mut::<FixedClock>().consume(scaled);
    for _ in 0..steps {
        fixed.run(world);
    }
    frame.run(world);
    world.clear_trackers();
    steps
}

/// Spawn an owner at `position` and a launcher attached to it.
///
/// Returns `(owner, launcher)`.
pub fn spawn_player_and_launcher(
    world: &mut World,
    config: &GameConfig,
    position: Vector2,
    sounds: LauncherSounds,
) -> (Entity, Entity) {
    let owner = world
        .spawn((MapPosition::from_vec(position), Signals::default()))
        .id();
    let launcher = world
        .spawn((
            ChargeController::new(config.tuning),
            LaunchOrigin::new(owner),
            config.projectile.normalized(),
            TrajectoryPath::default(),
            sounds,
        ))
        .id();
    info!("Spawned owner {:?} with launcher {:?}", owner, launcher);
    (owner, launcher)
}
