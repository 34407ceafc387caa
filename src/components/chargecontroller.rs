//! Charge-and-release launcher state machine.
//!
//! [`ChargeController`] owns the launcher's [`ChargeState`], the current
//! charge level (launch speed) and the cooldown timer. It is a plain
//! component with no ECS dependencies in its methods: the launcher systems in
//! [`crate::systems::launcher`] feed it input, time, aim and physics, and
//! turn its return values into spawns and events.
//!
//! # States
//!
//! ```text
//!          press               release
//!   Idle ---------> Charging ----------> Cooldown
//!    ^                                      |
//!    +------------- timer elapsed ----------+
//! ```
//!
//! A press outside `Idle` and a release outside `Charging` do nothing.
//!
//! # Aim
//!
//! The aim direction is the normalized vector from the launch origin to the
//! aim point. When both coincide the previous direction is kept; before any
//! valid aim the direction is `+X`.

use bevy_ecs::prelude::Component;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::trajectorypath::TrajectorySink;
use crate::trajectory::{BallisticParams, predict};

/// Remaining cooldown below this counts as elapsed.
const COOLDOWN_EPSILON: f32 = 1e-5;
/// Aim vectors shorter than this have no usable direction.
const MIN_AIM_LENGTH: f32 = 1e-6;

const DEFAULT_MIN_SPEED: f32 = 1.0;
const DEFAULT_MAX_SPEED: f32 = 5.0;
const DEFAULT_CHARGE_RATE: f32 = 3.0;
const DEFAULT_COOLDOWN: f32 = 0.5;
const DEFAULT_ORIENTATION_INTERVAL: f32 = 0.02;
const DEFAULT_PREDICTION_STEPS: usize = 2000;

/// Launcher state. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChargeState {
    #[default]
    Idle,
    Charging,
    Cooldown,
}

impl ChargeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeState::Idle => "idle",
            ChargeState::Charging => "charging",
            ChargeState::Cooldown => "cooldown",
        }
    }
}

/// Numeric tunables of a launcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeTuning {
    /// Launch speed at the start of a charge.
    pub min_speed: f32,
    /// Launch speed cap.
    pub max_speed: f32,
    /// Speed gained per second of charging.
    pub charge_rate: f32,
    /// Seconds after a release before the next charge may start.
    pub cooldown_duration: f32,
    /// Real-time seconds between projectile orientation updates.
    pub orientation_interval: f32,
    /// Number of points in a predicted trajectory.
    pub prediction_steps: usize,
    /// Extra rotation applied to spawned projectiles, in degrees.
    pub visual_rotation_offset: f32,
}

impl Default for ChargeTuning {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            charge_rate: DEFAULT_CHARGE_RATE,
            cooldown_duration: DEFAULT_COOLDOWN,
            orientation_interval: DEFAULT_ORIENTATION_INTERVAL,
            prediction_steps: DEFAULT_PREDICTION_STEPS,
            visual_rotation_offset: 0.0,
        }
    }
}

impl ChargeTuning {
    /// Repair values that would break the controller invariants.
    ///
    /// - non-finite values fall back to their defaults
    /// - `max_speed` is raised to `min_speed` if lower
    /// - negative rates and durations become zero
    /// - a non-positive orientation interval falls back to the default
    /// - at least one prediction step is kept
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        for (name, value, fallback) in [
            ("min_speed", &mut self.min_speed, defaults.min_speed),
            ("max_speed", &mut self.max_speed, defaults.max_speed),
            ("charge_rate", &mut self.charge_rate, defaults.charge_rate),
            ("cooldown", &mut self.cooldown_duration, defaults.cooldown_duration),
            (
                "orientation_interval",
                &mut self.orientation_interval,
                defaults.orientation_interval,
            ),
            (
                "rotation_offset",
                &mut self.visual_rotation_offset,
                defaults.visual_rotation_offset,
            ),
        ] {
            if !value.is_finite() {
                warn!("{} {} is not finite, using {}", name, value, fallback);
                *value = fallback;
            }
        }
        if self.max_speed < self.min_speed {
            warn!(
                "max_speed {} below min_speed {}, clamping",
                self.max_speed, self.min_speed
            );
            self.max_speed = self.min_speed;
        }
        if self.charge_rate < 0.0 {
            warn!("negative charge_rate {}, using 0", self.charge_rate);
            self.charge_rate = 0.0;
        }
        if self.cooldown_duration < 0.0 {
            warn!("negative cooldown {}, using 0", self.cooldown_duration);
            self.cooldown_duration = 0.0;
        }
        if self.orientation_interval <= 0.0 {
            warn!(
                "orientation interval {} is not positive, using {}",
                self.orientation_interval, DEFAULT_ORIENTATION_INTERVAL
            );
            self.orientation_interval = DEFAULT_ORIENTATION_INTERVAL;
        }
        if self.prediction_steps == 0 {
            warn!("prediction_steps is 0, using 1");
            self.prediction_steps = 1;
        }
        self
    }
}

/// Charge state machine attached to a launcher entity.
#[derive(Component, Clone, Debug)]
pub struct ChargeController {
    state: ChargeState,
    charge: f32,
    cooldown_remaining: f32,
    aim_direction: Vector2,
    tuning: ChargeTuning,
}

impl Default for ChargeController {
    fn default() -> Self {
        Self::new(ChargeTuning::default())
    }
}

impl ChargeController {
    pub fn new(tuning: ChargeTuning) -> Self {
        let tuning = tuning.normalized();
        Self {
            state: ChargeState::Idle,
            charge: tuning.min_speed,
            cooldown_remaining: 0.0,
            aim_direction: Vector2 { x: 1.0, y: 0.0 },
            tuning,
        }
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    /// Current launch speed.
    pub fn charge_level(&self) -> f32 {
        self.charge
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    /// Last valid unit aim direction.
    pub fn aim_direction(&self) -> Vector2 {
        self.aim_direction
    }

    pub fn tuning(&self) -> &ChargeTuning {
        &self.tuning
    }

    /// Replace the tunables. The charge level is clamped into the new range.
    pub fn set_tuning(&mut self, tuning: ChargeTuning) {
        self.tuning = tuning.normalized();
        self.charge = self
            .charge
            .clamp(self.tuning.min_speed, self.tuning.max_speed);
    }

    /// Velocity a projectile would get if released now.
    pub fn launch_velocity(&self) -> Vector2 {
        self.aim_direction.scale_by(self.charge)
    }

    /// Spawn rotation of a projectile aimed along the current direction.
    ///
    /// Zero degrees points along +Y, growing towards -X.
    pub fn launch_angle_degrees(&self) -> f32 {
        (-self.aim_direction.x).atan2(self.aim_direction.y).to_degrees()
    }

    /// Recompute the aim direction from `origin` towards `aim_point`.
    ///
    /// Keeps the previous direction when the two points coincide.
    pub fn update_aim(&mut self, origin: Vector2, aim_point: Vector2) -> Vector2 {
        let delta = aim_point - origin;
        let length = delta.length();
        if length > MIN_AIM_LENGTH {
            self.aim_direction = delta.scale_by(1.0 / length);
        }
        self.aim_direction
    }

    /// Start charging. Returns `true` if the launcher entered `Charging`.
    ///
    /// Refused while not `Idle` or while the controlling actor is terminal.
    pub fn on_press(&mut self, terminal: bool) -> bool {
        if terminal || self.state != ChargeState::Idle {
            return false;
        }
        self.charge = self.tuning.min_speed;
        self.state = ChargeState::Charging;
        true
    }

    /// Advance one fixed step while charging.
    ///
    /// Grows the charge towards `max_speed` and publishes the prediction for
    /// a release at the new charge. When the actor is terminal the sink is
    /// cleared and nothing else happens.
    pub fn tick<S: TrajectorySink + ?Sized>(
        &mut self,
        dt: f32,
        aim_point: Vector2,
        origin: Vector2,
        terminal: bool,
        params: &BallisticParams,
        sink: &mut S,
    ) {
        if self.state != ChargeState::Charging {
            return;
        }
        if terminal {
            sink.clear();
            return;
        }

        self.update_aim(origin, aim_point);
        if self.charge < self.tuning.max_speed {
            self.charge = (self.charge + dt.max(0.0) * self.tuning.charge_rate)
                .min(self.tuning.max_speed);
        }

        sink.set_path(predict(
            origin,
            self.launch_velocity(),
            params,
            self.tuning.prediction_steps,
        ));
    }

    /// Release the charge.
    ///
    /// The sink is always cleared. Returns the launch velocity and enters
    /// `Cooldown` only when charging and the actor is not terminal.
    pub fn on_release<S: TrajectorySink + ?Sized>(
        &mut self,
        aim_point: Vector2,
        origin: Vector2,
        terminal: bool,
        sink: &mut S,
    ) -> Option<Vector2> {
        sink.clear();
        if terminal || self.state != ChargeState::Charging {
            return None;
        }

        self.update_aim(origin, aim_point);
        let velocity = self.launch_velocity();
        self.charge = self.tuning.min_speed;
        self.state = ChargeState::Cooldown;
        self.cooldown_remaining = self.tuning.cooldown_duration;
        Some(velocity)
    }

    /// Count down the cooldown. Returns `true` when the launcher became `Idle`.
    pub fn advance_cooldown(&mut self, dt: f32) -> bool {
        if self.state != ChargeState::Cooldown {
            return false;
        }
        self.cooldown_remaining -= dt.max(0.0);
        if self.cooldown_remaining <= COOLDOWN_EPSILON {
            self.cooldown_remaining = 0.0;
            self.state = ChargeState::Idle;
            return true;
        }
        false
    }
}
