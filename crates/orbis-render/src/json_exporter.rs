//! JSON scene exporter — writes mesh and per-frame transforms for
//! offline inspection.
//!
//! Implements the `Renderer` trait. Captures the flattened vertex
//! buffers at `init`, the transform uniforms at each `submit_frame`,
//! then serializes the whole scene to a JSON file on `finalize()`. The
//! matrices are stored in column-major order, matching the layout a
//! GL-style boundary uploads.

use serde::Serialize;

use orbis_mesh::SphereMesh;
use orbis_types::{OrbisError, OrbisResult};

use crate::lighting::LightingProducts;
use crate::renderer::{RenderFrame, Renderer};

/// A single captured frame of transform uniforms.
#[derive(Serialize)]
struct FrameData {
    frame_index: u32,
    /// Column-major 4×4.
    projection: [f32; 16],
    /// Column-major 4×4.
    model_view: [f32; 16],
    /// Column-major 3×3.
    normal_matrix: [f32; 9],
}

/// Complete scene document for JSON export.
#[derive(Serialize)]
struct SceneData {
    vertex_count: usize,
    triangle_count: usize,
    /// Interleaved [x, y, z, w] per vertex.
    positions: Vec<f32>,
    /// Interleaved [x, y, z] per vertex.
    normals: Vec<f32>,
    lighting: LightingProducts,
    frames: Vec<FrameData>,
}

/// Exports the sphere scene to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonSceneExporter::new("scene.json");
/// exporter.init(&mesh)?;
/// // ... advance frames, calling submit_frame() each tick ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonSceneExporter {
    output_path: String,
    vertex_count: usize,
    triangle_count: usize,
    positions: Vec<f32>,
    normals: Vec<f32>,
    lighting: LightingProducts,
    frames: Vec<FrameData>,
}

impl JsonSceneExporter {
    /// Creates a new exporter that will write to the given path, with
    /// the default lighting products.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            vertex_count: 0,
            triangle_count: 0,
            positions: Vec::new(),
            normals: Vec::new(),
            lighting: LightingProducts::default(),
            frames: Vec::new(),
        }
    }

    /// Overrides the exported lighting products.
    pub fn with_lighting(mut self, lighting: LightingProducts) -> Self {
        self.lighting = lighting;
        self
    }
}

impl Renderer for JsonSceneExporter {
    fn init(&mut self, mesh: &SphereMesh) -> OrbisResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        self.positions = mesh.position_data();
        self.normals = mesh.normal_data();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> OrbisResult<()> {
        self.frames.push(FrameData {
            frame_index: frame.frame_index,
            projection: frame.transforms.projection.to_cols_array(),
            model_view: frame.transforms.model_view.to_cols_array(),
            normal_matrix: frame.transforms.normal_matrix.to_cols_array(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> OrbisResult<()> {
        let data = SceneData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            positions: std::mem::take(&mut self.positions),
            normals: std::mem::take(&mut self.normals),
            lighting: self.lighting,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| OrbisError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path, frames = data.frames.len(), "scene exported");
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
