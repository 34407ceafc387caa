//! Engine systems.
//!
//! Submodules overview
//! - [`audio`] – audio thread plus the systems bridging it with the message queues
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`] and the aim point
//! - [`launcher`] – input observer, fixed-step charging and cooldowns, projectile spawn
//! - [`lifetime`] – despawn expired or fallen projectiles
//! - [`movement`] – fixed-step ballistic integration
//! - [`orienter`] – real-time projectile orientation tasks
//! - [`render`] – draw world and debug overlay using Raylib
//! - [`time`] – update scaled and real frame time

pub mod audio;
pub mod input;
pub mod launcher;
pub mod lifetime;
pub mod movement;
pub mod orienter;
pub mod render;
pub mod time;
