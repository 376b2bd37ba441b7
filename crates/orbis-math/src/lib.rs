//! # orbis-math
//!
//! Linear algebra primitives for the Orbis sphere-rendering toolkit.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec4`, `Mat3`, `Mat4`)
//! - Unit-sphere projection helpers for mesh subdivision
//! - Transform constructors (Y rotation, translation, perspective) and
//!   normal-matrix extraction for the per-frame pipeline
//!
//! glam is column-major with the column-vector convention, so
//! `Mat4::to_cols_array` produces exactly the memory layout a GL-style
//! render boundary consumes for its matrix uniforms.

pub mod sphere;
pub mod transforms;

// Re-export glam types as the canonical math types for Orbis.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use sphere::{edge_midpoint_on_sphere, project_to_unit_sphere};
pub use transforms::{normal_matrix, perspective_deg, rotation_y_deg, translation};
