//! Camera configuration.

use serde::{Deserialize, Serialize};

use orbis_types::Scalar;
use orbis_types::constants::{
    DEFAULT_FAR, DEFAULT_FOV_Y_DEG, DEFAULT_NEAR, DEFAULT_VIEW_DISTANCE,
};
use orbis_types::{OrbisError, OrbisResult};

/// Fixed camera parameters for the perspective projection and the
/// viewing translation. The aspect ratio is not part of the config — it
/// tracks the viewport and is passed in per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view (degrees).
    pub fov_y_deg: Scalar,

    /// Near clip plane distance.
    pub near: Scalar,

    /// Far clip plane distance.
    pub far: Scalar,

    /// Distance from the camera to the model origin — the model-view
    /// translation is `(0, 0, -view_distance)`.
    pub view_distance: Scalar,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: DEFAULT_FOV_Y_DEG,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            view_distance: DEFAULT_VIEW_DISTANCE,
        }
    }
}

impl CameraConfig {
    /// Validates parameter ranges.
    pub fn validate(&self) -> OrbisResult<()> {
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(OrbisError::InvalidConfig(format!(
                "fov_y_deg must be in (0, 180), got {}",
                self.fov_y_deg
            )));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(OrbisError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}
