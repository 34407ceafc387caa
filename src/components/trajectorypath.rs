//! Predicted-path visualization sink.
//!
//! A launcher publishes its predicted trajectory through the
//! [`TrajectorySink`] trait. The [`TrajectoryPath`] component is the
//! engine's sink: the render system draws its points as a line strip, and an
//! empty path draws nothing.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Receiver of predicted trajectories.
pub trait TrajectorySink {
    /// Replace the displayed path with `points`, in order.
    fn set_path(&mut self, points: Vec<Vector2>);

    /// Hide the path. Equivalent to `set_path(Vec::new())`.
    fn clear(&mut self) {
        self.set_path(Vec::new());
    }
}

/// Ordered world-space points of the currently displayed prediction.
#[derive(Component, Clone, Debug, Default)]
pub struct TrajectoryPath {
    pub points: Vec<Vector2>,
}

impl TrajectoryPath {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

impl TrajectorySink for TrajectoryPath {
    fn set_path(&mut self, points: Vec<Vector2>) {
        self.points = points;
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut path = TrajectoryPath::default();
        assert!(path.is_empty());
        path.set_path(vec![Vector2 { x: 1.0, y: 2.0 }, Vector2 { x: 3.0, y: 4.0 }]);
        assert_eq!(path.len(), 2);
        path.clear();
        assert!(path.is_empty());
    }
}
