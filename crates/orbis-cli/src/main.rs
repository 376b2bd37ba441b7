//! Orbis CLI — mesh generation, scene export, benchmarking, and viewing.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "orbis")]
#[command(version, about = "Orbis — tetrahedral-subdivision sphere renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sphere mesh and report its statistics.
    Generate {
        /// Subdivision depth (clamped to 0-6).
        #[arg(short, long, default_value_t = 3)]
        level: i64,

        /// Optional JSON scene output path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export a mesh plus an animation of frame transforms to JSON.
    Export {
        /// Subdivision depth (clamped to 0-6).
        #[arg(short, long, default_value_t = 3)]
        level: i64,

        /// Animation length in seconds.
        #[arg(short, long, default_value_t = 2.0)]
        seconds: f32,

        /// Frames per second.
        #[arg(short, long, default_value_t = 60)]
        fps: u32,

        /// Optional scene config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Output JSON path.
        #[arg(short, long, default_value = "scene.json")]
        output: String,
    },

    /// Benchmark generation across subdivision levels.
    Bench {
        /// Highest level to benchmark (clamped to 0-6).
        #[arg(short, long, default_value_t = 6)]
        max_level: i64,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the vertex/triangle count law per level.
    Info,

    /// Launch the interactive viewer.
    View {
        /// Subdivision depth (clamped to 0-6).
        #[arg(short, long, default_value_t = 3)]
        level: i64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { level, output } => commands::generate(level, output.as_deref()),
        Commands::Export {
            level,
            seconds,
            fps,
            config,
            output,
        } => commands::export(level, seconds, fps, config.as_deref(), &output),
        Commands::Bench { max_level, output } => commands::bench(max_level, output.as_deref()),
        Commands::Info => commands::info(),
        Commands::View { level } => commands::view(level),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
