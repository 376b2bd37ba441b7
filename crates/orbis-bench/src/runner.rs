//! Benchmark runner — times mesh generation and frame computation.

use std::time::Instant;

use orbis_camera::{advance_frame, CameraConfig, TurntableState};
use orbis_mesh::{sphere_mesh, SubdivisionLevel};
use orbis_types::OrbisResult;

use crate::metrics::GenerationMetrics;

/// Simulated tick length for frame-timing samples (60 fps).
const FRAME_DT: f32 = 1.0 / 60.0;

/// Aspect ratio used for frame-timing samples.
const FRAME_ASPECT: f32 = 16.0 / 9.0;

/// Runs generation/frame benchmarks and collects metrics.
pub struct BenchRunner;

impl BenchRunner {
    /// Benchmark a single subdivision level.
    ///
    /// Rebuilds the mesh once, validates it, then runs `frame_samples`
    /// simulated ticks through the transform pipeline.
    pub fn run(level: SubdivisionLevel, frame_samples: u32) -> OrbisResult<GenerationMetrics> {
        let gen_start = Instant::now();
        let mesh = sphere_mesh(level);
        let generation_time = gen_start.elapsed().as_secs_f64();

        mesh.validate()?;

        let config = CameraConfig::default();
        let mut state = TurntableState::new();

        let frame_start = Instant::now();
        for _ in 0..frame_samples {
            let transforms = advance_frame(&mut state, &config, FRAME_DT, FRAME_ASPECT);
            // Keep the computation observable so it is not optimized away.
            std::hint::black_box(transforms);
        }
        let frame_elapsed = frame_start.elapsed().as_secs_f64();
        let avg_frame_time = if frame_samples > 0 {
            frame_elapsed / frame_samples as f64
        } else {
            0.0
        };

        let metrics = GenerationMetrics {
            level: level.depth(),
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            generation_time,
            avg_frame_time,
            frame_samples,
        };

        tracing::debug!(
            level = metrics.level,
            generation_ms = metrics.generation_time * 1000.0,
            "benchmarked level"
        );

        Ok(metrics)
    }

    /// Benchmark every level from 0 through `max_level` inclusive.
    pub fn run_range(
        max_level: SubdivisionLevel,
        frame_samples: u32,
    ) -> OrbisResult<Vec<GenerationMetrics>> {
        let mut results = Vec::new();
        for depth in 0..=max_level.depth() {
            let level = SubdivisionLevel::clamped(depth as i64);
            results.push(Self::run(level, frame_samples)?);
        }
        Ok(results)
    }
}
