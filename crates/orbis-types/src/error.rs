//! Error types for the Orbis toolkit.
//!
//! All crates return `OrbisResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Orbis toolkit.
#[derive(Debug, Error)]
pub enum OrbisError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Render boundary failure (context, upload, draw).
    #[error("Render error: {0}")]
    Render(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, OrbisError>`.
pub type OrbisResult<T> = Result<T, OrbisError>;
