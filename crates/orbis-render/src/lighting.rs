//! Lighting and material configuration.
//!
//! A single fixed light with Phong-style ambient/diffuse/specular terms.
//! The shader consumes the per-term *products* of light and material, so
//! they are computed once at startup, not per frame.

use serde::{Deserialize, Serialize};

use orbis_math::Vec4;

/// Light source configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Homogeneous light position.
    pub position: Vec4,
    /// Ambient intensity (RGBA).
    pub ambient: Vec4,
    /// Diffuse intensity (RGBA).
    pub diffuse: Vec4,
    /// Specular intensity (RGBA).
    pub specular: Vec4,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            position: Vec4::new(2.0, 2.0, 2.0, 1.0),
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vec4::new(1.0, 1.0, 1.0, 1.0),
            specular: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// Surface material configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Ambient reflectance (RGBA).
    pub ambient: Vec4,
    /// Diffuse reflectance (RGBA).
    pub diffuse: Vec4,
    /// Specular reflectance (RGBA).
    pub specular: Vec4,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.2, 0.3, 0.8, 1.0),
            diffuse: Vec4::new(0.2, 0.3, 0.8, 1.0),
            specular: Vec4::new(1.0, 1.0, 1.0, 1.0),
            shininess: 64.0,
        }
    }
}

/// Precomputed light×material products, uploaded once as uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingProducts {
    /// Homogeneous light position.
    pub light_position: Vec4,
    /// Component-wise ambient product.
    pub ambient: Vec4,
    /// Component-wise diffuse product.
    pub diffuse: Vec4,
    /// Component-wise specular product.
    pub specular: Vec4,
    /// Specular exponent.
    pub shininess: f32,
}

impl LightingProducts {
    /// Computes the per-term products of light and material.
    pub fn precompute(light: &LightingConfig, material: &MaterialConfig) -> Self {
        Self {
            light_position: light.position,
            ambient: light.ambient * material.ambient,
            diffuse: light.diffuse * material.diffuse,
            specular: light.specular * material.specular,
            shininess: material.shininess,
        }
    }
}

impl Default for LightingProducts {
    fn default() -> Self {
        Self::precompute(&LightingConfig::default(), &MaterialConfig::default())
    }
}
