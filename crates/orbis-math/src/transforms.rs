//! Transform constructors for the per-frame pipeline.
//!
//! Thin, degree-based wrappers over `glam` that pin down the conventions
//! the rest of the toolkit relies on: right-handed view space, GL clip
//! space (`z` in `[-1, 1]`), column vectors on the right. Under that
//! convention `translation(..) * rotation_y_deg(..)` rotates first, then
//! translates.

use glam::{Mat3, Mat4, Vec3};

/// Rotation about the vertical (Y) axis, angle in degrees.
#[inline]
pub fn rotation_y_deg(angle_deg: f32) -> Mat4 {
    Mat4::from_rotation_y(angle_deg.to_radians())
}

/// Translation by `(tx, ty, tz)`.
#[inline]
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(tx, ty, tz))
}

/// Right-handed perspective projection with GL clip space, vertical
/// field of view in degrees.
#[inline]
pub fn perspective_deg(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y_deg.to_radians(), aspect, near, far)
}

/// Extracts the normal-transform matrix from a model-view matrix.
///
/// Takes the upper-left 3×3 block. This is only a valid normal transform
/// because the toolkit applies rotation and translation exclusively; with
/// non-uniform scale the inverse-transpose would be required instead.
#[inline]
pub fn normal_matrix(model_view: &Mat4) -> Mat3 {
    Mat3::from_mat4(*model_view)
}
