//! Aim point resource.
//!
//! World-space point the launchers aim at. The demo writes the mouse
//! position here once per frame; tests set it directly.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Clone, Copy, Debug)]
pub struct AimPoint(pub Vector2);

impl Default for AimPoint {
    fn default() -> Self {
        Self(Vector2::zero())
    }
}

