//! # orbis-render
//!
//! Pluggable render-boundary abstraction for Orbis.
//!
//! The core mesh and transform crates have zero dependency on any
//! graphics API; this crate defines the capability interface they are
//! consumed through. Provides a `Renderer` trait with a
//! `HeadlessRenderer` stub, a `JsonSceneExporter` for offline
//! inspection, fixed lighting/material configuration with precomputed
//! lighting products, and TOML scene configuration.

pub mod config;
pub mod json_exporter;
pub mod lighting;
pub mod renderer;

pub use config::{SceneConfig, SubdivisionRequest};
pub use json_exporter::JsonSceneExporter;
pub use lighting::{LightingConfig, LightingProducts, MaterialConfig};
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
