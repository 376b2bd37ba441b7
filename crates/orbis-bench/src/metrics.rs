//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected for one subdivision level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetrics {
    /// Subdivision depth.
    pub level: u32,
    /// Vertex count at this level.
    pub vertex_count: usize,
    /// Triangle count at this level.
    pub triangle_count: usize,
    /// Wall-clock time for one full mesh rebuild (seconds).
    pub generation_time: f64,
    /// Average wall-clock time per frame-transform computation (seconds).
    pub avg_frame_time: f64,
    /// Number of frame-transform samples averaged.
    pub frame_samples: u32,
}

impl GenerationMetrics {
    /// Format as a CSV header row.
    pub fn to_csv_header() -> String {
        "level,vertex_count,triangle_count,generation_ms,avg_frame_us,frame_samples".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.4},{:.4},{}",
            self.level,
            self.vertex_count,
            self.triangle_count,
            self.generation_time * 1000.0,
            self.avg_frame_time * 1.0e6,
            self.frame_samples,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[GenerationMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
