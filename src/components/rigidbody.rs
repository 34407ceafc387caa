//! Ballistic body component.
//!
//! The [`RigidBody`] component stores the velocity and the per-body physics
//! parameters of a projectile. The world gravity, timestep and velocity
//! iteration count live in [`PhysicsSettings`](crate::resources::physics::PhysicsSettings);
//! the body contributes its gravity scale and drag.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::physics::PhysicsSettings;
use crate::trajectory::BallisticParams;

/// Simulated projectile body.
///
/// Read by [`ballistic_movement`](crate::systems::movement::ballistic_movement)
/// to advance [`MapPosition`](super::mapposition::MapPosition), and by
/// orienter tasks to sample the direction of flight.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `gravity_scale` - Multiplier on the world gravity
/// - `drag` - Linear damping coefficient (0.0 = none)
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub gravity_scale: f32,
    pub drag: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Body at rest with unit gravity scale and no drag.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            gravity_scale: 1.0,
            drag: 0.0,
        }
    }

    /// Body with the given physics parameters, at rest.
    pub fn with_physics(gravity_scale: f32, drag: f32) -> Self {
        Self {
            gravity_scale,
            drag,
            ..Self::new()
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Integration parameters for this body under the given world settings.
    pub fn ballistic_params(&self, physics: &PhysicsSettings) -> BallisticParams {
        physics.ballistic_params(self.gravity_scale, self.drag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.gravity_scale, 1.0));
        assert!(approx_eq(rb.drag, 0.0));
    }

    #[test]
    fn test_rigidbody_with_physics() {
        let rb = RigidBody::with_physics(0.5, 2.0).with_velocity(Vector2 { x: 3.0, y: 4.0 });
        assert!(approx_eq(rb.gravity_scale, 0.5));
        assert!(approx_eq(rb.drag, 2.0));
        assert!(approx_eq(rb.velocity.x, 3.0));
        assert!(approx_eq(rb.velocity.y, 4.0));
    }

    #[test]
    fn test_ballistic_params_combine_world_and_body() {
        let physics = PhysicsSettings::new(Vector2 { x: 0.0, y: 980.0 }, 1.0 / 50.0, 4);
        let rb = RigidBody::with_physics(0.25, 1.5);
        let params = rb.ballistic_params(&physics);
        assert!(approx_eq(params.gravity.y, 980.0));
        assert!(approx_eq(params.gravity_scale, 0.25));
        assert!(approx_eq(params.drag, 1.5));
        assert!(approx_eq(params.timestep, 0.02));
        assert_eq!(params.sub_steps, 4);
    }
}
