//! Projectile lifetime system.
//!
//! Runs in the fixed schedule. Each step subtracts the physics timestep from
//! every [`Lifetime`] and despawns entities whose countdown ran out or that
//! fell past their kill plane. Despawning a projectile is what ends its
//! orienter task.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::lifetime::Lifetime;
use crate::components::mapposition::MapPosition;
use crate::resources::physics::PhysicsSettings;

pub fn lifetime_system(
    mut query: Query<(Entity, &mut Lifetime, Option<&MapPosition>)>,
    physics: Res<PhysicsSettings>,
    mut commands: Commands,
) {
    let dt = physics.timestep;
    for (entity, mut lifetime, position) in query.iter_mut() {
        lifetime.remaining -= dt;
        let fell = position.is_some_and(|p| lifetime.past_kill_plane(p.pos.y));
        if lifetime.remaining <= 0.0 || fell {
            trace!("despawning {:?} (fell: {})", entity, fell);
            commands.entity(entity).try_despawn();
        }
    }
}
