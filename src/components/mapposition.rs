//! World-space position component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity's pivot.
///
/// Launch origins are derived from the owner's `MapPosition`, and projectiles
/// are moved by writing to it from the fixed-step integrator.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
