//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that the aim system and
//! the renderer agree on the world/screen transform.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera2D;

#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);
