//! Projectile orientation scheduler.
//!
//! [`orient_projectiles`] runs once per rendered frame with the unscaled
//! frame delta. Every [`ProjectileOrienter`] task that wakes looks its target
//! up: a missing target ends the task, otherwise the target's [`Rotation`]
//! is turned to face its velocity.

use bevy_ecs::prelude::*;

use crate::components::orienter::ProjectileOrienter;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::resources::worldtime::WorldTime;

/// Velocities shorter than this keep the current facing.
const MIN_FACING_SPEED: f32 = 1e-6;

pub fn orient_projectiles(
    mut tasks: Query<(Entity, &mut ProjectileOrienter)>,
    mut targets: Query<(Option<&RigidBody>, Option<&mut Rotation>)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (task, mut orienter) in tasks.iter_mut() {
        if !orienter.sleep(time.real_delta) {
            continue;
        }
        let Ok((body, rotation)) = targets.get_mut(orienter.target) else {
            commands.entity(task).try_despawn();
            continue;
        };
        let (Some(body), Some(mut rotation)) = (body, rotation) else {
            continue;
        };
        let v = body.velocity;
        if v.length() > MIN_FACING_SPEED {
            *rotation = Rotation::facing_velocity(v.x, v.y);
        }
    }
}
