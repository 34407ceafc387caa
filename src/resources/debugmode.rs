//! Debug toggle resource.
//!
//! The presence of this resource enables the debug overlay (charge readout,
//! projectile and task counts). Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws diagnostics.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
