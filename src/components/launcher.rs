//! Launcher wiring components.
//!
//! A launcher entity carries a [`ChargeController`](super::chargecontroller::ChargeController),
//! a [`TrajectoryPath`](super::trajectorypath::TrajectoryPath) and the
//! components below. The launcher does not move on its own: its origin
//! follows the owner entity (usually the player).

use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::lifetime::Lifetime;
use crate::components::rigidbody::RigidBody;

/// Where projectiles leave from.
///
/// The launch origin is the owner's [`MapPosition`](super::mapposition::MapPosition)
/// plus `offset`. If the owner is gone or carries [`Dead`], the launcher is
/// inert.
#[derive(Component, Clone, Copy, Debug)]
pub struct LaunchOrigin {
    pub owner: Entity,
    pub offset: Vector2,
}

impl LaunchOrigin {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

/// Marks an actor whose launchers must stop charging and firing.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Dead;

/// Physics and lifetime of the projectiles a launcher spawns.
///
/// Both the trajectory prediction and the spawned [`RigidBody`] are built
/// from this, so the drawn arc and the real flight share their parameters.
#[derive(Component, Clone, Copy, Debug)]
pub struct ProjectileTemplate {
    pub gravity_scale: f32,
    pub drag: f32,
    /// Seconds before the world despawns the projectile.
    pub lifetime: f32,
    /// Despawn once the projectile's `y` is greater than this.
    pub kill_plane: Option<f32>,
    /// Half extents used for drawing.
    pub size: Vector2,
}

impl Default for ProjectileTemplate {
    fn default() -> Self {
        Self {
            gravity_scale: 1.0,
            drag: 0.0,
            lifetime: 5.0,
            kill_plane: None,
            size: Vector2 { x: 3.0, y: 8.0 },
        }
    }
}

impl ProjectileTemplate {
    /// Replace non-finite parameters with defaults and keep the lifetime
    /// positive, so every projectile is eventually despawned.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !self.gravity_scale.is_finite() {
            warn!(
                "gravity_scale {} is not finite, using {}",
                self.gravity_scale, defaults.gravity_scale
            );
            self.gravity_scale = defaults.gravity_scale;
        }
        if !self.drag.is_finite() || self.drag < 0.0 {
            warn!("drag {} is not usable, using {}", self.drag, defaults.drag);
            self.drag = defaults.drag;
        }
        if !(self.lifetime.is_finite() && self.lifetime > 0.0) {
            warn!(
                "lifetime {} is not a positive number, using {}",
                self.lifetime, defaults.lifetime
            );
            self.lifetime = defaults.lifetime;
        }
        if self.kill_plane.is_some_and(|y| !y.is_finite()) {
            warn!("kill_plane {:?} is not finite, disabling it", self.kill_plane);
            self.kill_plane = None;
        }
        self
    }

    pub fn body(&self, velocity: Vector2) -> RigidBody {
        RigidBody::with_physics(self.gravity_scale, self.drag).with_velocity(velocity)
    }

    pub fn lifetime(&self) -> Lifetime {
        let lifetime = Lifetime::new(self.lifetime);
        match self.kill_plane {
            Some(y) => lifetime.with_kill_plane(y),
            None => lifetime,
        }
    }
}

/// Tag on spawned projectiles, pointing back at the launcher.
#[derive(Component, Clone, Copy, Debug)]
pub struct Projectile {
    pub launcher: Entity,
    pub size: Vector2,
}

/// Sound variants played by the audio hook. One is picked at random per event.
#[derive(Component, Clone, Debug, Default)]
pub struct LauncherSounds {
    pub charge: Vec<String>,
    pub release: Vec<String>,
}

impl LauncherSounds {
    pub fn new(charge: Vec<String>, release: Vec<String>) -> Self {
        Self { charge, release }
    }

    pub fn pick_charge(&self) -> Option<&str> {
        pick(&self.charge)
    }

    pub fn pick_release(&self) -> Option<&str> {
        pick(&self.release)
    }
}

fn pick(ids: &[String]) -> Option<&str> {
    if ids.is_empty() {
        return None;
    }
    Some(ids[fastrand::usize(..ids.len())].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_body_copies_physics() {
        let template = ProjectileTemplate {
            gravity_scale: 0.5,
            drag: 0.1,
            ..Default::default()
        };
        let body = template.body(Vector2 { x: 2.0, y: -1.0 });
        assert_eq!(body.gravity_scale, 0.5);
        assert_eq!(body.drag, 0.1);
        assert_eq!(body.velocity.x, 2.0);
    }

    #[test]
    fn test_template_lifetime_carries_kill_plane() {
        let template = ProjectileTemplate {
            lifetime: 2.0,
            kill_plane: Some(100.0),
            ..Default::default()
        };
        let lifetime = template.lifetime();
        assert_eq!(lifetime.remaining, 2.0);
        assert!(lifetime.past_kill_plane(100.5));
        assert!(!ProjectileTemplate::default().lifetime().past_kill_plane(1e9));
    }

    #[test]
    fn test_template_normalized_repairs_non_finite() {
        let template = ProjectileTemplate {
            gravity_scale: f32::NAN,
            drag: f32::INFINITY,
            lifetime: f32::NAN,
            kill_plane: Some(f32::NAN),
            ..Default::default()
        }
        .normalized();
        assert_eq!(template.gravity_scale, 1.0);
        assert_eq!(template.drag, 0.0);
        assert_eq!(template.lifetime, 5.0);
        assert!(template.kill_plane.is_none());

        let valid = ProjectileTemplate {
            drag: 0.25,
            kill_plane: Some(400.0),
            ..Default::default()
        }
        .normalized();
        assert_eq!(valid.drag, 0.25);
        assert_eq!(valid.kill_plane, Some(400.0));
    }

    #[test]
    fn test_sounds_pick_from_variants() {
        let sounds = LauncherSounds::new(
            vec!["charge_a".into(), "charge_b".into()],
            Vec::new(),
        );
        for _ in 0..16 {
            let id = sounds.pick_charge().unwrap();
            assert!(id == "charge_a" || id == "charge_b");
        }
        assert!(sounds.pick_release().is_none());
    }
}
