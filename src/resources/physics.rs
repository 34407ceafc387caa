//! World physics settings.
//!
//! Gravity, the fixed timestep and the velocity iteration count. These are
//! the world half of [`BallisticParams`]; the projectile's gravity scale and
//! drag are the other half. Prediction and integration must read the same
//! values or the drawn path drifts away from the real one.

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::Vector2;

use crate::trajectory::BallisticParams;

const DEFAULT_GRAVITY_Y: f32 = 980.0;
const DEFAULT_TIMESTEP: f32 = 1.0 / 50.0;
const DEFAULT_VELOCITY_ITERATIONS: u32 = 8;

#[derive(Resource, Clone, Copy, Debug)]
pub struct PhysicsSettings {
    /// World gravity; +Y points down the screen.
    pub gravity: Vector2,
    /// Fixed simulation step in seconds.
    pub timestep: f32,
    /// Integration slices per fixed step.
    pub velocity_iterations: u32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vector2 {
                x: 0.0,
                y: DEFAULT_GRAVITY_Y,
            },
            timestep: DEFAULT_TIMESTEP,
            velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
        }
    }
}

impl PhysicsSettings {
    pub fn new(gravity: Vector2, timestep: f32, velocity_iterations: u32) -> Self {
        Self {
            gravity,
            timestep,
            velocity_iterations,
        }
    }

    /// Replace values the fixed clock and the integrator cannot run on.
    ///
    /// The timestep must be finite and positive, gravity finite and at least
    /// one velocity iteration is kept.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            warn!(
                "timestep {} is not a positive number, using {}",
                self.timestep, defaults.timestep
            );
            self.timestep = defaults.timestep;
        }
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite()) {
            warn!(
                "gravity ({}, {}) is not finite, using ({}, {})",
                self.gravity.x, self.gravity.y, defaults.gravity.x, defaults.gravity.y
            );
            self.gravity = defaults.gravity;
        }
        if self.velocity_iterations == 0 {
            warn!("velocity_iterations is 0, using 1");
            self.velocity_iterations = 1;
        }
        self
    }

    pub fn ballistic_params(&self, gravity_scale: f32, drag: f32) -> BallisticParams {
        BallisticParams::new(
            self.gravity,
            gravity_scale,
            drag,
            self.timestep,
            self.velocity_iterations,
        )
    }
}
