//! Recursive tetrahedral subdivision of the unit sphere.
//!
//! Starting from a fixed seed tetrahedron, each face is split into four
//! children by projecting its edge midpoints onto the unit sphere, down
//! to the requested depth. Winding order is preserved at every step, so
//! all emitted triangles face outward consistently.

use orbis_math::{edge_midpoint_on_sphere, Vec4};
use orbis_types::constants::{MAX_SUBDIVISION, MIN_SUBDIVISION};

use crate::mesh::SphereMesh;

use serde::{Deserialize, Serialize};

/// Seed tetrahedron vertices. Close to (but deliberately not exactly)
/// unit length; the literals are pinned for output matching.
const SEED_A: Vec4 = Vec4::new(0.0, 0.0, -1.0, 1.0);
const SEED_B: Vec4 = Vec4::new(0.0, 0.942809, 0.333333, 1.0);
const SEED_C: Vec4 = Vec4::new(-0.816497, -0.471405, 0.333333, 1.0);
const SEED_D: Vec4 = Vec4::new(0.816497, -0.471405, 0.333333, 1.0);

/// Subdivision recursion depth, clamped to `[0, 6]`.
///
/// Depth `n` produces `4 × 4^n` triangles; each triangle contributes
/// three fresh vertices (no index buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubdivisionLevel(u32);

impl SubdivisionLevel {
    /// The seed tetrahedron, unsubdivided.
    pub const MIN: Self = Self(MIN_SUBDIVISION);
    /// The deepest supported subdivision (16384 triangles).
    pub const MAX: Self = Self(MAX_SUBDIVISION);

    /// Creates a level, clamping out-of-range requests into `[0, 6]`.
    pub fn clamped(depth: i64) -> Self {
        Self(depth.clamp(MIN_SUBDIVISION as i64, MAX_SUBDIVISION as i64) as u32)
    }

    /// Returns the recursion depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.0
    }

    /// One level deeper, saturating at the maximum.
    pub fn finer(&self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    /// One level shallower, saturating at zero.
    pub fn coarser(&self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }

    /// Number of triangles at this level: `4 × 4^n`.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        4 * 4_usize.pow(self.0)
    }

    /// Number of emitted vertices at this level: `12 × 4^n`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangle_count() * 3
    }
}

impl Default for SubdivisionLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl std::fmt::Display for SubdivisionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Generates the sphere approximation at the given subdivision level.
///
/// Pure function of `level`: the seed tetrahedron is fixed, and the
/// output buffer is pre-sized from the triangle-count law. The four seed
/// faces are wound so that all of them face outward from the origin.
pub fn sphere_mesh(level: SubdivisionLevel) -> SphereMesh {
    let mut mesh = SphereMesh::with_capacity(level.triangle_count());
    let depth = level.depth();

    divide(&mut mesh, SEED_A, SEED_B, SEED_C, depth);
    divide(&mut mesh, SEED_D, SEED_C, SEED_B, depth);
    divide(&mut mesh, SEED_A, SEED_D, SEED_B, depth);
    divide(&mut mesh, SEED_A, SEED_C, SEED_D, depth);

    tracing::debug!(
        level = level.depth(),
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "generated sphere mesh"
    );

    mesh
}

/// Splits `(a, b, c)` into four children down to `depth`, emitting leaf
/// triangles into `mesh`.
///
/// Child ordering keeps the parent's winding: corner triangles reuse the
/// parent's corner order, and the center triangle `(ab, bc, ac)` runs the
/// same way around.
fn divide(mesh: &mut SphereMesh, a: Vec4, b: Vec4, c: Vec4, depth: u32) {
    if depth == 0 {
        mesh.push_triangle(a, b, c);
        return;
    }

    let ab = edge_midpoint_on_sphere(a, b);
    let ac = edge_midpoint_on_sphere(a, c);
    let bc = edge_midpoint_on_sphere(b, c);

    divide(mesh, a, ab, ac, depth - 1);
    divide(mesh, ab, b, bc, depth - 1);
    divide(mesh, bc, c, ac, depth - 1);
    divide(mesh, ab, bc, ac, depth - 1);
}
