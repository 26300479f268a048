//! Slingshot launch
//!
//! A press marks the anchor, the release point sets the pull. The plane flies
//! opposite the pull, with power capped at the maximum drag distance.

use glam::Vec2;

use crate::tuning::LaunchTuning;

/// Clamp a drag vector to the maximum distance, preserving direction
///
/// Only drags strictly longer than the cap are rescaled.
pub fn clamp_drag(drag: Vec2, max_distance: f32) -> Vec2 {
    if drag.length() > max_distance {
        drag.normalize() * max_distance
    } else {
        drag
    }
}

/// Map a drag vector to a launch velocity
pub fn launch_velocity(drag: Vec2, tuning: &LaunchTuning) -> Vec2 {
    clamp_drag(drag, tuning.max_drag_distance) * tuning.velocity_multiplier
}

/// Tracks one press/release gesture
#[derive(Debug, Clone, Default)]
pub struct LaunchController {
    start: Option<Vec2>,
}

impl LaunchController {
    pub fn new() -> Self {
        Self { start: None }
    }

    /// Record the anchor of a new gesture (replaces any pending one)
    pub fn press_start(&mut self, position: Vec2) {
        self.start = Some(position);
    }

    /// Finish the gesture; returns the launch velocity if a press was recorded
    pub fn release(&mut self, position: Vec2, tuning: &LaunchTuning) -> Option<Vec2> {
        let start = self.start.take()?;
        Some(launch_velocity(position - start, tuning))
    }

    /// Drop a pending gesture without launching
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Clamped pull for a gesture still in progress (for drawing the band)
    pub fn pending_drag(&self, pointer: Vec2, tuning: &LaunchTuning) -> Option<Vec2> {
        self.start
            .map(|start| clamp_drag(pointer - start, tuning.max_drag_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tuning(max_drag_distance: f32, velocity_multiplier: f32) -> LaunchTuning {
        LaunchTuning {
            max_drag_distance,
            velocity_multiplier,
        }
    }

    #[test]
    fn test_short_drag_scenario() {
        let t = tuning(100.0, -15.0);
        let mut launcher = LaunchController::new();
        launcher.press_start(Vec2::new(100.0, 150.0));
        let v = launcher.release(Vec2::new(120.0, 170.0), &t);
        assert_eq!(v, Some(Vec2::new(-300.0, -300.0)));
        assert!(!launcher.is_dragging());
    }

    #[test]
    fn test_long_drag_is_capped() {
        let t = LaunchTuning::default();
        let start = Vec2::new(100.0, 100.0);
        let end = Vec2::new(100.0, 100.0 + t.max_drag_distance + 50.0);
        let mut launcher = LaunchController::new();
        launcher.press_start(start);
        let v = launcher.release(end, &t).expect("launch");
        // Straight down pull, straight up launch at full power
        assert!((v - Vec2::new(0.0, -2000.0)).length() < 1e-3);
    }

    #[test]
    fn test_drag_at_cap_is_untouched() {
        let drag = Vec2::new(60.0, 80.0);
        assert_eq!(clamp_drag(drag, 100.0), drag);
    }

    #[test]
    fn test_zero_drag_gives_zero_velocity() {
        let mut launcher = LaunchController::new();
        launcher.press_start(Vec2::new(5.0, 5.0));
        let v = launcher.release(Vec2::new(5.0, 5.0), &LaunchTuning::default());
        assert_eq!(v, Some(Vec2::ZERO));
    }

    #[test]
    fn test_release_without_press() {
        let mut launcher = LaunchController::new();
        assert_eq!(launcher.release(Vec2::new(200.0, 250.0), &LaunchTuning::default()), None);
    }

    #[test]
    fn test_second_release_is_noop() {
        let t = LaunchTuning::default();
        let mut launcher = LaunchController::new();
        launcher.press_start(Vec2::new(100.0, 150.0));
        assert!(launcher.release(Vec2::new(120.0, 170.0), &t).is_some());
        assert_eq!(launcher.release(Vec2::new(130.0, 180.0), &t), None);
    }

    #[test]
    fn test_cancel_and_pending_drag() {
        let t = tuning(100.0, -10.0);
        let mut launcher = LaunchController::new();
        assert_eq!(launcher.pending_drag(Vec2::ZERO, &t), None);

        launcher.press_start(Vec2::ZERO);
        let pull = launcher.pending_drag(Vec2::new(0.0, 300.0), &t);
        assert_eq!(pull, Some(Vec2::new(0.0, 100.0)));

        launcher.cancel();
        assert!(!launcher.is_dragging());
        assert_eq!(launcher.release(Vec2::new(0.0, 300.0), &t), None);
    }

    proptest! {
        #[test]
        fn prop_long_drags_clamp_to_max_power(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
        ) {
            let t = tuning(100.0, -15.0);
            let drag = Vec2::new(x, y);
            prop_assume!(drag.length() > t.max_drag_distance);

            let v = launch_velocity(drag, &t);
            let expected = t.max_drag_distance * t.velocity_multiplier.abs();
            prop_assert!((v.length() - expected).abs() < expected * 1e-4);
            // Opposite the pull
            prop_assert!(v.normalize().dot(drag.normalize()) < -0.9999);
        }

        #[test]
        fn prop_short_drags_pass_through(
            x in -70.0f32..70.0,
            y in -70.0f32..70.0,
        ) {
            let t = tuning(100.0, -15.0);
            let drag = Vec2::new(x, y);
            prop_assert_eq!(launch_velocity(drag, &t), drag * t.velocity_multiplier);
        }
    }
}
