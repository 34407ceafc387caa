//! Rotation component.

use bevy_ecs::prelude::Component;

/// Facing angle in degrees.
///
/// Projectiles get an initial value from the aim angle at spawn time and are
/// kept aligned with their velocity by
/// [`orient_projectiles`](crate::systems::orienter::orient_projectiles).
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }

    /// Facing for a body moving along `(vx, vy)`, with "up" as the sprite's forward.
    pub fn facing_velocity(vx: f32, vy: f32) -> Self {
        Self {
            degrees: vy.atan2(vx).to_degrees() + 90.0,
        }
    }
}
