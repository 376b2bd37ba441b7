//! Non-indexed sphere mesh buffer.
//!
//! The buffer holds one position and one normal per emitted vertex,
//! grouped in runs of 3 per triangle. There is no index buffer: vertices
//! on shared edges are duplicated. The render boundary uploads the
//! flattened arrays as a 4-component position attribute and a 3-component
//! normal attribute and draws `vertex_count()` vertices non-indexed.

use serde::{Deserialize, Serialize};

use orbis_math::{Vec3, Vec4};
use orbis_types::constants::UNIT_LENGTH_TOLERANCE;
use orbis_types::{OrbisError, OrbisResult};

/// A non-indexed triangle-list mesh on the unit sphere.
///
/// Invariants (checked by [`validate`](Self::validate)):
/// - `positions.len() == normals.len()`, a multiple of 3
/// - every position has unit-length xyz and `w == 1`
/// - every normal equals its position's xyz truncation exactly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereMesh {
    /// Homogeneous vertex positions, `w` always 1.
    pub positions: Vec<Vec4>,
    /// Vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
}

impl SphereMesh {
    /// Creates an empty mesh with capacity for `triangle_capacity` triangles.
    pub fn with_capacity(triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangle_capacity * 3),
            normals: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Appends one triangle.
    ///
    /// Each vertex's normal is its position's xyz truncation: on a unit
    /// sphere centered at the origin, a point's outward normal is its own
    /// direction. Callers must only pass on-sphere positions.
    #[inline]
    pub fn push_triangle(&mut self, a: Vec4, b: Vec4, c: Vec4) {
        self.positions.extend([a, b, c]);
        self.normals
            .extend([a.truncate(), b.truncate(), c.truncate()]);
    }

    /// Returns the three positions of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [Vec4; 3] {
        let base = t * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Flattens positions for upload: `[x, y, z, w]` per vertex.
    pub fn position_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * 4);
        for p in &self.positions {
            out.extend(p.to_array());
        }
        out
    }

    /// Flattens normals for upload: `[x, y, z]` per vertex.
    pub fn normal_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            out.extend(n.to_array());
        }
        out
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Position and normal arrays have the same length
    /// - Vertex count is a multiple of 3
    /// - Every position lies on the unit sphere with `w == 1`
    /// - Every normal equals its position's xyz truncation
    pub fn validate(&self) -> OrbisResult<()> {
        if self.positions.len() != self.normals.len() {
            return Err(OrbisError::InvalidMesh(format!(
                "Position count ({}) != normal count ({})",
                self.positions.len(),
                self.normals.len()
            )));
        }

        if self.positions.len() % 3 != 0 {
            return Err(OrbisError::InvalidMesh(
                "Vertex count is not divisible by 3".into(),
            ));
        }

        for (i, p) in self.positions.iter().enumerate() {
            if p.w != 1.0 {
                return Err(OrbisError::InvalidMesh(format!(
                    "Position {} has w = {} (expected 1.0)",
                    i, p.w
                )));
            }
            let len = p.truncate().length();
            if (len - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
                return Err(OrbisError::InvalidMesh(format!(
                    "Position {} is off the unit sphere (length {})",
                    i, len
                )));
            }
            if self.normals[i] != p.truncate() {
                return Err(OrbisError::InvalidMesh(format!(
                    "Normal {} does not match its position's direction",
                    i
                )));
            }
        }

        Ok(())
    }
}
