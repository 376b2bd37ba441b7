//! Scene configuration.
//!
//! TOML-loadable description of the whole scene: subdivision depth,
//! camera parameters, light and material. Defaults reproduce the
//! reference demo exactly.

use serde::{Deserialize, Serialize};

use orbis_camera::CameraConfig;
use orbis_mesh::SubdivisionLevel;
use orbis_types::{OrbisError, OrbisResult};

use crate::lighting::{LightingConfig, MaterialConfig};

/// Configuration for a sphere scene.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    /// Requested subdivision depth; clamped into `[0, 6]` on use.
    pub subdivision: SubdivisionRequest,

    /// Camera parameters.
    pub camera: CameraConfig,

    /// Light source.
    pub light: LightingConfig,

    /// Surface material.
    pub material: MaterialConfig,
}

/// Raw subdivision request as it appears in config files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubdivisionRequest(pub i64);

impl Default for SubdivisionRequest {
    fn default() -> Self {
        Self(SubdivisionLevel::default().depth() as i64)
    }
}

impl SceneConfig {
    /// The subdivision level, clamped to the supported range.
    pub fn level(&self) -> SubdivisionLevel {
        SubdivisionLevel::clamped(self.subdivision.0)
    }

    /// Parses a config from a TOML string.
    pub fn from_toml_str(s: &str) -> OrbisResult<Self> {
        let config: Self = toml::from_str(s)
            .map_err(|e| OrbisError::InvalidConfig(format!("TOML parse failed: {e}")))?;
        config.camera.validate()?;
        Ok(config)
    }

    /// Loads a config from a TOML file.
    pub fn load(path: &str) -> OrbisResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config to a TOML string.
    pub fn to_toml_string(&self) -> OrbisResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| OrbisError::Serialization(format!("TOML serialization failed: {e}")))
    }
}
