//! Rendering constants and scene defaults.

/// Turntable rotation speed (degrees per second).
pub const ANGULAR_SPEED_DEG_PER_SEC: f32 = 30.0;

/// Default vertical field of view (degrees).
pub const DEFAULT_FOV_Y_DEG: f32 = 45.0;

/// Default near clip plane distance.
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip plane distance.
pub const DEFAULT_FAR: f32 = 10.0;

/// Default camera viewing distance — the model is translated this far
/// down the -Z axis before projection.
pub const DEFAULT_VIEW_DISTANCE: f32 = 3.0;

/// Minimum subdivision depth (the bare seed tetrahedron).
pub const MIN_SUBDIVISION: u32 = 0;

/// Maximum subdivision depth. Depth 6 yields 4×4^6 = 16384 triangles,
/// which keeps the non-indexed vertex buffer at a reasonable size.
pub const MAX_SUBDIVISION: u32 = 6;

/// Tolerance for unit-length checks on generated vertices.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1.0e-5;
