//! chargeshot library.
//!
//! A charge-and-release projectile launcher on `bevy_ecs` and raylib: hold
//! to build launch speed, see the predicted ballistic arc while charging,
//! release to spawn a projectile that keeps facing its direction of flight.
//!
//! - [`trajectory`] – the predictor and the shared integration step
//! - [`components`] – launcher state machine, projectile and task components
//! - [`resources`] – clocks, physics settings, aim point, config, audio bridge
//! - [`events`] – input, launcher and audio events plus their hook observers
//! - [`systems`] – fixed-step launcher and physics systems, orienter, drawing
//! - [`game`] – world setup and the fixed/frame schedules

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
pub mod trajectory;
