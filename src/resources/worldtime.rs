//! Frame time resource.
//!
//! `delta` is the scaled frame time that drives the simulation clock;
//! `real_delta` is the unscaled wall-clock frame time used by tasks that must
//! keep running while the simulation is paused (`time_scale == 0`).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    /// Unscaled seconds of the current frame.
    pub real_delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            real_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale <= 0.0
    }
}
