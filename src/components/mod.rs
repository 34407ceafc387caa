//! ECS components for entities.
//!
//! Submodules overview:
//! - [`chargecontroller`] – charge/release/cooldown state machine of a launcher
//! - [`launcher`] – launch origin, projectile template, sounds and the `Dead` marker
//! - [`lifetime`] – despawn countdown and kill plane for projectiles
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`orienter`] – periodic task keeping one projectile facing its velocity
//! - [`rigidbody`] – ballistic body storing velocity, gravity scale and drag
//! - [`rotation`] – rotation angle in degrees
//! - [`signals`] – per-entity animation flags, triggers and scalars
//! - [`trajectorypath`] – predicted path sink drawn by the renderer

pub mod chargecontroller;
pub mod launcher;
pub mod lifetime;
pub mod mapposition;
pub mod orienter;
pub mod rigidbody;
pub mod rotation;
pub mod signals;
pub mod trajectorypath;
