//! Camera state smoothed toward the pointer.

use glam::{Vec2, Vec3};

use crate::viewport::PointerOffset;

/// Distance of the camera from the scene origin along Z.
pub const CAMERA_DISTANCE: f32 = 500.0;

/// How far the camera target moves per pixel of pointer offset.
const POINTER_GAIN: f32 = 0.3;

/// Fraction of the remaining distance covered each tick.
const SMOOTHING: f32 = 0.02;

/// Camera position and the target it is drifting toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Current position. The camera always looks at the origin.
    pub position: Vec3,
    /// Target x/y derived from the latest pointer offset.
    pub target: Vec2,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec2::ZERO,
        }
    }
}

impl CameraState {
    /// Advance the camera one tick toward the pointer.
    ///
    /// First-order low-pass: each call closes 2% of the gap, so the approach
    /// is monotonic and never overshoots. Screen y grows downward, world y
    /// grows upward, hence the sign flip.
    pub fn follow(&mut self, pointer: PointerOffset) {
        self.target = Vec2::new(pointer.x * POINTER_GAIN, -pointer.y * POINTER_GAIN);
        self.position.x += (self.target.x - self.position.x) * SMOOTHING;
        self.position.y += (self.target.y - self.position.y) * SMOOTHING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_axis() {
        let camera = CameraState::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 500.0));
    }

    #[test]
    fn converges_without_overshoot() {
        let mut camera = CameraState::default();
        let pointer = PointerOffset::new(100.0, 0.0);
        let mut last = camera.position.x;
        for _ in 0..2000 {
            camera.follow(pointer);
            assert!(camera.position.x >= last);
            assert!(camera.position.x <= camera.target.x);
            last = camera.position.x;
        }
        assert!((camera.position.x - 30.0).abs() < 0.01);
        assert_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn pointer_below_center_moves_camera_down() {
        let mut camera = CameraState::default();
        camera.follow(PointerOffset::new(0.0, 50.0));
        assert!(camera.position.y < 0.0);
        assert!((camera.target.y + 15.0).abs() < 1e-4);
        assert_eq!(camera.position.z, CAMERA_DISTANCE);
    }
}
