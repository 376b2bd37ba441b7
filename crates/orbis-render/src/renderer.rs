//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per animation tick to draw the current
//! mesh under the frame's transforms. `init` is the mesh-upload
//! boundary; it runs again whenever the subdivision level changes and
//! always receives a fully built buffer (the caller never mutates a
//! mesh a draw could be reading). The headless renderer discards all
//! frames, serving as a no-op for benchmarks and CI.

use orbis_camera::FrameTransforms;
use orbis_mesh::SphereMesh;
use orbis_types::OrbisResult;

/// A single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    /// Animation tick this frame corresponds to.
    pub frame_index: u32,
    /// Transform uniforms for the draw call.
    pub transforms: FrameTransforms,
}

/// Trait for consuming mesh and transform output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards frames (benchmarks, CI)
/// - [`JsonSceneExporter`](crate::JsonSceneExporter) — Captures the scene to JSON
/// - The bevy viewer uploads through its own asset path and is driven
///   by the same mesh/transform data
pub trait Renderer: Send {
    /// Uploads a mesh. Called at startup and after every subdivision
    /// level change, before the next `submit_frame`.
    fn init(&mut self, mesh: &SphereMesh) -> OrbisResult<()>;

    /// Submits a frame's transforms for drawing.
    fn submit_frame(&mut self, frame: &RenderFrame) -> OrbisResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> OrbisResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &SphereMesh) -> OrbisResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> OrbisResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> OrbisResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
