//! CLI command implementations.

use orbis_bench::{BenchRunner, GenerationMetrics};
use orbis_camera::{advance_frame, TurntableState};
use orbis_mesh::{sphere_mesh, SubdivisionLevel};
use orbis_render::renderer::{RenderFrame, Renderer};
use orbis_render::{JsonSceneExporter, LightingProducts, SceneConfig, SubdivisionRequest};

/// Viewport aspect ratio used for headless export (matches the viewer's
/// 1280×720 window).
const EXPORT_ASPECT: f32 = 16.0 / 9.0;

/// Frame-timing samples per benchmarked level.
const BENCH_FRAME_SAMPLES: u32 = 1000;

/// Generate a mesh and report its statistics.
pub fn generate(level: i64, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let level = SubdivisionLevel::clamped(level);
    let mesh = sphere_mesh(level);
    mesh.validate()?;

    println!("Orbis Mesh Generation");
    println!("─────────────────────");
    println!("Level:      {level}");
    println!("Triangles:  {}", mesh.triangle_count());
    println!("Vertices:   {}", mesh.vertex_count());

    if let Some(path) = output {
        let mut exporter = JsonSceneExporter::new(path);
        exporter.init(&mesh)?;
        exporter.finalize()?;
        println!("Scene written to: {path}");
    }

    Ok(())
}

/// Export a mesh plus an animation of frame transforms to JSON.
pub fn export(
    level: i64,
    seconds: f32,
    fps: u32,
    config_path: Option<&str>,
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if fps == 0 {
        return Err("fps must be at least 1".into());
    }

    // A config file wins over the bare --level flag.
    let config = match config_path {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig {
            subdivision: SubdivisionRequest(level),
            ..Default::default()
        },
    };

    let level = config.level();
    let mesh = sphere_mesh(level);
    mesh.validate()?;

    let products = LightingProducts::precompute(&config.light, &config.material);
    let mut exporter = JsonSceneExporter::new(output).with_lighting(products);
    exporter.init(&mesh)?;

    let frame_count = (seconds * fps as f32).round() as u32;
    let dt = 1.0 / fps as f32;
    let mut state = TurntableState::new();

    for i in 0..frame_count {
        let transforms = advance_frame(&mut state, &config.camera, dt, EXPORT_ASPECT);
        exporter.submit_frame(&RenderFrame {
            frame_index: i,
            transforms,
        })?;
    }
    exporter.finalize()?;

    println!("Orbis Scene Export");
    println!("──────────────────");
    println!("Level:      {level}");
    println!("Frames:     {frame_count} ({seconds}s @ {fps}fps)");
    println!("Written to: {output}");

    Ok(())
}

/// Benchmark generation across subdivision levels.
pub fn bench(max_level: i64, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Orbis Benchmark Suite");
    println!("═════════════════════");
    println!();

    let max_level = SubdivisionLevel::clamped(max_level);
    let results = BenchRunner::run_range(max_level, BENCH_FRAME_SAMPLES)?;

    for m in &results {
        println!(
            "Level {}: {:>8} tris  gen {:.3}ms  frame {:.2}µs",
            m.level,
            m.triangle_count,
            m.generation_time * 1000.0,
            m.avg_frame_time * 1.0e6,
        );
    }
    println!();

    let csv = GenerationMetrics::to_csv(&results);
    if let Some(path) = output {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Print the vertex/triangle count law per level.
pub fn info() -> Result<(), Box<dyn std::error::Error>> {
    println!("Orbis Subdivision Levels");
    println!("────────────────────────");
    println!("level  triangles  vertices");
    for depth in 0..=SubdivisionLevel::MAX.depth() {
        let level = SubdivisionLevel::clamped(depth as i64);
        println!(
            "{:>5}  {:>9}  {:>8}",
            level,
            level.triangle_count(),
            level.vertex_count()
        );
    }
    Ok(())
}

/// Launch the interactive viewer.
pub fn view(level: i64) -> Result<(), Box<dyn std::error::Error>> {
    orbis_viewer::launch_viewer(SubdivisionLevel::clamped(level))
}
