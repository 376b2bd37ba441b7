//! Integration tests for orbis-types.

use orbis_types::constants;
use orbis_types::OrbisError;

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn subdivision_bounds_are_ordered() {
    assert!(constants::MIN_SUBDIVISION < constants::MAX_SUBDIVISION);
    assert_eq!(constants::MAX_SUBDIVISION, 6);
}

#[test]
fn camera_defaults_are_sane() {
    assert!(constants::DEFAULT_NEAR > 0.0);
    assert!(constants::DEFAULT_NEAR < constants::DEFAULT_FAR);
    assert!(constants::DEFAULT_VIEW_DISTANCE < constants::DEFAULT_FAR);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = OrbisError::InvalidMesh("position/normal length mismatch".into());
    assert!(err.to_string().contains("length mismatch"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: OrbisError = io.into();
    assert!(matches!(err, OrbisError::Io(_)));
}

#[test]
fn config_error_display() {
    let err = OrbisError::InvalidConfig("fov_y_deg must be positive".into());
    assert!(err.to_string().starts_with("Invalid configuration"));
}
