//! Fixed-step projectile integrator.
//!
//! [`ballistic_movement`] advances every [`RigidBody`] by one
//! fixed step, split into `velocity_iterations` slices of
//! [`BallisticParams::integrate`](crate::trajectory::BallisticParams::integrate).
//! Trajectory prediction uses the same slices, so after `k` fixed steps a
//! projectile sits on point `k * velocity_iterations - 1` of the path that
//! was drawn before its release.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::physics::PhysicsSettings;

pub fn ballistic_movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    physics: Res<PhysicsSettings>,
) {
    let slices = physics.velocity_iterations.max(1);
    for (mut position, mut rigidbody) in query.iter_mut() {
        let params = rigidbody.ballistic_params(&physics);
        let (mut pos, mut vel) = (position.pos, rigidbody.velocity);
        for _ in 0..slices {
            (pos, vel) = params.integrate(pos, vel);
        }
        position.pos = pos;
        rigidbody.velocity = vel;
    }
}
