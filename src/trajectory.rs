//! Trajectory prediction.
//!
//! [`predict`] walks a projectile forward in time using the same discrete
//! stepping the engine uses to move real projectiles
//! ([`ballistic_movement`](crate::systems::movement::ballistic_movement)),
//! not a closed-form ballistic formula. Each fixed simulation step is split
//! into `sub_steps` slices, gravity is added to the accumulated move step
//! before drag is applied, and every slice produces one sample.
//!
//! # Example
//!
//! ```ignore
//! let params = BallisticParams::new(Vector2 { x: 0.0, y: 980.0 }, 1.0, 0.0, 1.0 / 60.0, 8);
//! let path = predict(origin, Vector2 { x: 300.0, y: -400.0 }, &params, 2000);
//! assert_eq!(path.len(), 2000);
//! ```

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Physics inputs shared by the predictor and the projectile integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallisticParams {
    /// World gravity in units per second squared.
    pub gravity: Vector2,
    /// Per-projectile multiplier applied to `gravity`.
    pub gravity_scale: f32,
    /// Linear drag coefficient (per second).
    pub drag: f32,
    /// Fixed simulation timestep in seconds.
    pub timestep: f32,
    /// Velocity solver iterations per fixed step.
    pub sub_steps: u32,
}

impl BallisticParams {
    pub fn new(
        gravity: Vector2,
        gravity_scale: f32,
        drag: f32,
        timestep: f32,
        sub_steps: u32,
    ) -> Self {
        Self {
            gravity,
            gravity_scale,
            drag,
            timestep,
            sub_steps,
        }
    }

    /// Duration of one integration slice. A zero iteration count counts as one.
    pub fn slice(&self) -> f32 {
        self.timestep / self.sub_steps.max(1) as f32
    }

    /// Velocity multiplier applied once per slice.
    pub fn drag_factor(&self) -> f32 {
        1.0 - self.slice() * self.drag
    }

    /// Advance a body by one slice.
    ///
    /// Gravity is applied to the velocity first, then drag, then the
    /// position moves by the new velocity. This is the per-slice form of the
    /// move-step recurrence in [`predict`].
    pub fn integrate(&self, position: Vector2, velocity: Vector2) -> (Vector2, Vector2) {
        let dt = self.slice();
        let accel = self.gravity.scale_by(self.gravity_scale * dt);
        let velocity = (velocity + accel).scale_by(self.drag_factor());
        (position + velocity.scale_by(dt), velocity)
    }
}

/// Predict `steps` future positions of a projectile launched from `origin`.
///
/// Always returns exactly `steps` points. The function is pure; calling it
/// every tick is expected.
pub fn predict(
    origin: Vector2,
    initial_velocity: Vector2,
    params: &BallisticParams,
    steps: usize,
) -> Vec<Vector2> {
    let dt = params.slice();
    let gravity_step = params.gravity.scale_by(params.gravity_scale * dt * dt);
    let drag_factor = params.drag_factor();
    let mut move_step = initial_velocity.scale_by(dt);
    let mut position = origin;

    let mut points = Vec::with_capacity(steps);
    for _ in 0..steps {
        move_step = (move_step + gravity_step).scale_by(drag_factor);
        position = position + move_step;
        points.push(position);
    }
    points
}

/// Serializable snapshot of a prediction, used by the headless `--predict` mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryDump {
    pub origin: [f32; 2],
    pub velocity: [f32; 2],
    pub gravity: [f32; 2],
    pub gravity_scale: f32,
    pub drag: f32,
    pub timestep: f32,
    pub sub_steps: u32,
    pub points: Vec<[f32; 2]>,
}

impl TrajectoryDump {
    pub fn capture(
        origin: Vector2,
        velocity: Vector2,
        params: &BallisticParams,
        steps: usize,
    ) -> Self {
        let points = predict(origin, velocity, params, steps)
            .into_iter()
            .map(|p| [p.x, p.y])
            .collect();
        Self {
            origin: [origin.x, origin.y],
            velocity: [velocity.x, velocity.y],
            gravity: [params.gravity.x, params.gravity.y],
            gravity_scale: params.gravity_scale,
            drag: params.drag,
            timestep: params.timestep,
            sub_steps: params.sub_steps,
            points,
        }
    }
}
