//! Unit-sphere projection for subdivision vertices.
//!
//! Positions are homogeneous points (`w = 1`); directions live in the
//! xyz components only. Projection normalizes the direction and resets
//! the homogeneous coordinate, so projected points stay valid positions.

use glam::Vec4;

/// Projects a homogeneous point onto the unit sphere centered at the origin.
///
/// Normalizes the xyz direction, discards the input `w`, and sets the
/// output `w = 1`. Undefined for a zero-length direction; the seed
/// tetrahedron and midpoint subdivision never produce one.
#[inline]
pub fn project_to_unit_sphere(v: Vec4) -> Vec4 {
    v.truncate().normalize().extend(1.0)
}

/// Midpoint of edge `(a, b)`, projected onto the unit sphere.
///
/// The midpoint is a *linear* interpolation at `t = 0.5`, then projected.
/// This is not a great-circle interpolation: triangle areas come out
/// slightly non-uniform, but convergence to the sphere surface is exact
/// as subdivision depth increases. The reference output depends on this
/// exact formulation, so it must not be replaced with slerp.
#[inline]
pub fn edge_midpoint_on_sphere(a: Vec4, b: Vec4) -> Vec4 {
    project_to_unit_sphere(a.lerp(b, 0.5))
}
