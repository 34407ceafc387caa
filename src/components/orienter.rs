//! Projectile orientation task.
//!
//! Each spawned projectile gets one companion entity holding a
//! [`ProjectileOrienter`]. The task sleeps for `interval` seconds of real
//! time, wakes, checks that its target still exists, and turns the target to
//! face its velocity. Once the target is gone the task despawns itself; that
//! is its only way to end.
//!
//! Real time means the unscaled frame delta: a paused simulation keeps its
//! projectiles frozen in place, but their facing still updates.
//!
//! # Related
//!
//! - [`crate::systems::orienter::orient_projectiles`] – the scheduler for these tasks

use bevy_ecs::prelude::*;

/// Periodic task aligning one projectile with its velocity.
#[derive(Component, Clone, Copy, Debug)]
pub struct ProjectileOrienter {
    /// The projectile this task owns a reference to.
    pub target: Entity,
    /// Seconds between wake-ups.
    pub interval: f32,
    /// Real time slept since the last wake-up.
    pub elapsed: f32,
}

impl ProjectileOrienter {
    pub fn new(target: Entity, interval: f32) -> Self {
        Self {
            target,
            interval,
            elapsed: 0.0,
        }
    }

    /// Sleep for `dt` seconds. Returns `true` if the task is due to wake.
    ///
    /// Missed wake-ups collapse into one: a long frame does not queue
    /// several orientation updates. A non-finite interval wakes every call.
    pub fn sleep(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval || !self.interval.is_finite() {
            self.elapsed %= self.interval.max(f32::EPSILON);
            return true;
        }
        false
    }
}
