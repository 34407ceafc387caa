//! Projectile lifetime component.
//!
//! The [`Lifetime`] component counts down simulation time; when it runs out
//! the entity is despawned. An optional kill plane despawns bodies that fall
//! past a world-space `y`, so stray projectiles do not live for the whole
//! countdown.
//!
//! # Related
//!
//! - [`crate::systems::lifetime::lifetime_system`] – the system that despawns

use bevy_ecs::prelude::Component;

/// Countdown to despawn, in simulation seconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct Lifetime {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
    /// Despawn once the position's `y` is greater than this.
    pub kill_below: Option<f32>,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Lifetime {
            remaining: seconds,
            kill_below: None,
        }
    }

    pub fn with_kill_plane(mut self, y: f32) -> Self {
        self.kill_below = Some(y);
        self
    }

    /// Whether a body at height `y` is past the kill plane.
    pub fn past_kill_plane(&self, y: f32) -> bool {
        self.kill_below.is_some_and(|limit| y > limit)
    }
}
