//! Launcher systems.
//!
//! These connect [`ChargeController`] to the world:
//!
//! - [`launcher_input_observer`] turns fire presses and releases into
//!   `on_press`/`on_release` calls and spawns the projectile on a successful
//!   release.
//! - [`charge_launchers`] runs once per fixed step and ticks every charging
//!   launcher, which grows the charge and republishes the predicted path.
//! - [`advance_launcher_cooldowns`] runs right after it and returns cooled
//!   down launchers to `Idle`.
//!
//! A launcher is terminal when its owner carries [`Dead`] or no longer
//! exists. Terminal launchers never start a charge, never fire and show no
//! path.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::chargecontroller::{ChargeController, ChargeState};
use crate::components::launcher::{Dead, LaunchOrigin, Projectile, ProjectileTemplate};
use crate::components::mapposition::MapPosition;
use crate::components::orienter::ProjectileOrienter;
use crate::components::rotation::Rotation;
use crate::components::signals::Signals;
use crate::components::trajectorypath::TrajectoryPath;
use crate::events::input::{InputAction, InputEvent};
use crate::events::launcher::{ChargeReleasedEvent, ChargeStartedEvent, LauncherStateChangedEvent};
use crate::resources::aim::AimPoint;
use crate::resources::physics::PhysicsSettings;

/// Launch origin in world space and whether the owner is terminal.
///
/// A missing owner is terminal; its origin falls back to the bare offset.
pub fn resolve_origin(
    origin: &LaunchOrigin,
    owners: &Query<(&MapPosition, Has<Dead>)>,
) -> (Vector2, bool) {
    match owners.get(origin.owner) {
        Ok((position, dead)) => (position.pos + origin.offset, dead),
        Err(_) => (origin.offset, true),
    }
}

/// Spawn a projectile and its orienter task. Returns the projectile entity.
///
/// The projectile gets [`MapPosition`], [`Rotation`], a
/// [`RigidBody`](crate::components::rigidbody::RigidBody) built from
/// `template`, a [`Lifetime`](crate::components::lifetime::Lifetime) and the
/// [`Projectile`] tag. The orienter task is a separate entity that keeps only
/// the projectile's id.
pub fn spawn_projectile(
    commands: &mut Commands,
    launcher: Entity,
    position: Vector2,
    velocity: Vector2,
    rotation_degrees: f32,
    template: &ProjectileTemplate,
    orientation_interval: f32,
) -> Entity {
    let projectile = commands
        .spawn((
            MapPosition::from_vec(position),
            Rotation::new(rotation_degrees),
            template.body(velocity),
            template.lifetime(),
            Projectile {
                launcher,
                size: template.size,
            },
        ))
        .id();
    commands.spawn(ProjectileOrienter::new(projectile, orientation_interval));
    projectile
}

/// Handle fire input for every launcher.
pub fn launcher_input_observer(
    trigger: On<InputEvent>,
    mut launchers: Query<(
        Entity,
        &mut ChargeController,
        &LaunchOrigin,
        &ProjectileTemplate,
        &mut TrajectoryPath,
    )>,
    owners: Query<(&MapPosition, Has<Dead>)>,
    aim: Res<AimPoint>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.action != InputAction::Fire {
        return;
    }

    for (entity, mut controller, origin, template, mut path) in launchers.iter_mut() {
        let (origin_pos, terminal) = resolve_origin(origin, &owners);

        if event.pressed {
            if controller.on_press(terminal) {
                debug!("launcher {:?} charging", entity);
                commands.trigger(ChargeStartedEvent { launcher: entity });
                commands.trigger(LauncherStateChangedEvent {
                    launcher: entity,
                    from: ChargeState::Idle,
                    to: ChargeState::Charging,
                });
            }
            continue;
        }

        let Some(velocity) = controller.on_release(aim.0, origin_pos, terminal, &mut *path) else {
            continue;
        };
        let tuning = *controller.tuning();
        let rotation = controller.launch_angle_degrees() + tuning.visual_rotation_offset;
        let projectile = spawn_projectile(
            &mut commands,
            entity,
            origin_pos,
            velocity,
            rotation,
            template,
            tuning.orientation_interval,
        );
        info!(
            "launcher {:?} fired {:?} at ({:.2}, {:.2})",
            entity, projectile, velocity.x, velocity.y
        );
        commands.trigger(ChargeReleasedEvent {
            launcher: entity,
            projectile,
            velocity,
        });
        commands.trigger(LauncherStateChangedEvent {
            launcher: entity,
            from: ChargeState::Charging,
            to: ChargeState::Cooldown,
        });
    }
}

/// Tick every charging launcher by one fixed step.
///
/// Also publishes the owner's `"charge_level"` signal.
pub fn charge_launchers(
    mut launchers: Query<(
        &mut ChargeController,
        &LaunchOrigin,
        &ProjectileTemplate,
        &mut TrajectoryPath,
    )>,
    owners: Query<(&MapPosition, Has<Dead>)>,
    mut signals: Query<&mut Signals>,
    aim: Res<AimPoint>,
    physics: Res<PhysicsSettings>,
) {
    let dt = physics.timestep;
    for (mut controller, origin, template, mut path) in launchers.iter_mut() {
        if controller.state() != ChargeState::Charging {
            continue;
        }
        let (origin_pos, terminal) = resolve_origin(origin, &owners);
        let params = physics.ballistic_params(template.gravity_scale, template.drag);
        controller.tick(dt, aim.0, origin_pos, terminal, &params, &mut *path);

        if let Ok(mut owner_signals) = signals.get_mut(origin.owner) {
            owner_signals.set_scalar("charge_level", controller.charge_level());
        }
    }
}

/// Count down launcher cooldowns by one fixed step.
pub fn advance_launcher_cooldowns(
    mut launchers: Query<(Entity, &mut ChargeController)>,
    physics: Res<PhysicsSettings>,
    mut commands: Commands,
) {
    for (entity, mut controller) in launchers.iter_mut() {
        if controller.advance_cooldown(physics.timestep) {
            commands.trigger(LauncherStateChangedEvent {
                launcher: entity,
                from: ChargeState::Cooldown,
                to: ChargeState::Idle,
            });
        }
    }
}
