//! Frame transform computation.

use serde::{Deserialize, Serialize};

use orbis_math::{normal_matrix, perspective_deg, rotation_y_deg, translation, Mat3, Mat4};
use orbis_types::constants::ANGULAR_SPEED_DEG_PER_SEC;
use orbis_types::Scalar;

use crate::config::CameraConfig;

/// Accumulated turntable rotation, owned by the render loop.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TurntableState {
    /// Rotation about the vertical axis (degrees).
    pub angle_deg: Scalar,
}

impl TurntableState {
    /// Starts at angle zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the rotation by `dt` seconds at 30°/s.
    pub fn advance(&mut self, dt: Scalar) {
        self.angle_deg += dt * ANGULAR_SPEED_DEG_PER_SEC;
    }
}

/// The transform triple uploaded as uniforms before each draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTransforms {
    /// Perspective projection (clip from view space).
    pub projection: Mat4,
    /// Model-view: rotate about Y, then translate down -Z.
    pub model_view: Mat4,
    /// Normal transform, the upper-left 3×3 of `model_view`.
    pub normal_matrix: Mat3,
}

impl FrameTransforms {
    /// Builds the transform triple for a given turntable angle and
    /// viewport aspect ratio. Pure over its inputs.
    pub fn compute(config: &CameraConfig, angle_deg: Scalar, aspect: Scalar) -> Self {
        let projection = perspective_deg(config.fov_y_deg, aspect, config.near, config.far);
        let model_view =
            translation(0.0, 0.0, -config.view_distance) * rotation_y_deg(angle_deg);
        let normal_matrix = normal_matrix(&model_view);
        Self {
            projection,
            model_view,
            normal_matrix,
        }
    }
}

/// Advances the turntable by `dt` seconds and computes the frame's
/// transforms.
///
/// Call at most once per tick: the angle accumulation is not idempotent,
/// so a second call without an intervening tick double-advances the
/// rotation.
pub fn advance_frame(
    state: &mut TurntableState,
    config: &CameraConfig,
    dt: Scalar,
    aspect: Scalar,
) -> FrameTransforms {
    state.advance(dt);
    FrameTransforms::compute(config, state.angle_deg, aspect)
}
