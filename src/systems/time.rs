//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The scaled
/// value goes to `delta`/`elapsed`, the raw one to `real_delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = dt.max(0.0);
    let scaled_dt = dt * wt.time_scale.max(0.0);
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.real_delta = dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_and_real_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.1);
        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 0.05).abs() < 1e-6);
        assert!((wt.real_delta - 0.1).abs() < 1e-6);
        assert!((wt.elapsed - 0.05).abs() < 1e-6);
        assert_eq!(wt.frame_count, 1);
    }

    #[test]
    fn test_paused_keeps_real_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.0));
        update_world_time(&mut world, 0.016);
        let wt = world.resource::<WorldTime>();
        assert!(wt.is_paused());
        assert_eq!(wt.delta, 0.0);
        assert!((wt.real_delta - 0.016).abs() < 1e-6);
    }
}
