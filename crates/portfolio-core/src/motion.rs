//! Time-driven pose for the floating hero geometry: a slow constant spin
//! plus a gentle float wobble.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingMotion {
    /// Constant spin rates in radians per second (x, y; z unused).
    pub spin: Vec3,
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatingMotion {
    fn default() -> Self {
        Self {
            spin: Vec3::new(SPIN_RATE_X, SPIN_RATE_Y, 0.0),
            speed: FLOAT_SPEED,
            rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
        }
    }
}

/// Euler rotation (radians) and vertical lift in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryPose {
    pub rotation: Vec3,
    pub lift: f32,
}

impl FloatingMotion {
    pub fn pose(&self, elapsed_sec: f32) -> GeometryPose {
        let phase = elapsed_sec / 4.0 * self.speed;
        let ri = self.rotation_intensity;
        let wobble = Vec3::new(
            phase.cos() / 8.0 * ri,
            phase.sin() / 8.0 * ri,
            phase.sin() / 20.0 * ri,
        );
        GeometryPose {
            rotation: self.spin * elapsed_sec + wobble,
            lift: phase.sin() / 10.0 * self.float_intensity,
        }
    }
}
