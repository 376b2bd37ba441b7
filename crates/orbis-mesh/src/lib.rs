//! # orbis-mesh
//!
//! Sphere approximation by recursive tetrahedral subdivision.
//!
//! ## Key Types
//!
//! - [`SphereMesh`] — Non-indexed triangle-list buffer: homogeneous vertex
//!   positions and parallel unit normals, three vertices per triangle.
//! - [`SubdivisionLevel`] — Recursion depth, clamped to `[0, 6]`.
//! - [`sphere_mesh`] — The generator: subdivides a seed tetrahedron and
//!   projects new vertices onto the unit sphere.

pub mod mesh;
pub mod subdivision;

pub use mesh::SphereMesh;
pub use subdivision::{sphere_mesh, SubdivisionLevel};
