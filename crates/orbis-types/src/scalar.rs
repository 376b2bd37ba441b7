//! Scalar type alias for the toolkit.
//!
//! Using `f32` for GPU compatibility (vertex attributes and transform
//! uniforms are uploaded as 32-bit floats). The alias makes it easy to
//! experiment with `f64` precision for offline validation.

/// The floating-point type used throughout Orbis.
///
/// Set to `f32` for GPU compatibility.
pub type Scalar = f32;
