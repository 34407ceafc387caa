//! Fixed-step simulation clock.
//!
//! Frames have variable length; the launcher and projectile physics advance
//! in whole steps of [`PhysicsSettings::timestep`](super::physics::PhysicsSettings).
//! [`FixedClock`] accumulates scaled frame time and reports how many fixed
//! steps are due, keeping the remainder for the next frame.

use bevy_ecs::prelude::Resource;

/// Upper bound on steps per frame, so a long stall does not snowball.
const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;

#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedClock {
    pub timestep: f32,
    pub accumulator: f32,
    pub max_steps_per_frame: u32,
    /// Total fixed steps run so far.
    pub steps: u64,
}

impl FixedClock {
    pub fn new(timestep: f32) -> Self {
        Self {
            timestep,
            accumulator: 0.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
            steps: 0,
        }
    }

    /// Add `dt` seconds and return the number of fixed steps to run now.
    ///
    /// If more than `max_steps_per_frame` steps are due, the excess time is
    /// dropped.
    pub fn consume(&mut self, dt: f32) -> u32 {
        if self.timestep <= 0.0 {
            return 0;
        }
        self.accumulator += dt.max(0.0);
        let mut due = 0;
        while self.accumulator + f32::EPSILON >= self.timestep {
            self.accumulator = (self.accumulator - self.timestep).max(0.0);
            due += 1;
            if due == self.max_steps_per_frame {
                self.accumulator = self.accumulator.min(self.timestep);
                log::debug!("fixed clock capped at {} steps this frame", due);
                break;
            }
        }
        self.steps += due as u64;
        due
    }
}
