//! ECS resources made available to systems.
//!
//! Overview
//! - `aim` – world-space point launchers aim at
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `fixedclock` – accumulator turning frame time into fixed physics steps
//! - `gameconfig` – INI-backed launcher, projectile, physics and window settings
//! - `input` – per-frame keyboard and mouse state relevant to the game
//! - `physics` – gravity, timestep and velocity iterations
//! - `worldtime` – scaled and real frame delta
pub mod aim;
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod fixedclock;
pub mod gameconfig;
pub mod input;
pub mod physics;
pub mod worldtime;
