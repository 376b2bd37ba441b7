//! # orbis-types
//!
//! Shared types, error types, and numeric constants for the Orbis
//! sphere-rendering toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Orbis crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{OrbisError, OrbisResult};
pub use scalar::Scalar;
