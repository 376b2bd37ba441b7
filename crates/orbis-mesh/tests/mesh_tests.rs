//! Integration tests for orbis-mesh.

use orbis_math::{Vec3, Vec4};
use orbis_mesh::{sphere_mesh, SphereMesh, SubdivisionLevel};

const TOL: f32 = 1.0e-5;

// ─── SubdivisionLevel Tests ───────────────────────────────────

#[test]
fn level_clamps_below() {
    assert_eq!(SubdivisionLevel::clamped(-3), SubdivisionLevel::MIN);
}

#[test]
fn level_clamps_above() {
    assert_eq!(SubdivisionLevel::clamped(42), SubdivisionLevel::MAX);
}

#[test]
fn level_steps_saturate() {
    assert_eq!(SubdivisionLevel::MAX.finer(), SubdivisionLevel::MAX);
    assert_eq!(SubdivisionLevel::MIN.coarser(), SubdivisionLevel::MIN);
    assert_eq!(
        SubdivisionLevel::clamped(2).finer(),
        SubdivisionLevel::clamped(3)
    );
}

#[test]
fn count_law() {
    for n in 0..=6 {
        let level = SubdivisionLevel::clamped(n);
        let expected_tris = 4 * 4_usize.pow(n as u32);
        assert_eq!(level.triangle_count(), expected_tris);
        assert_eq!(level.vertex_count(), expected_tris * 3);
    }
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn generated_counts_match_law() {
    for n in 0..=6 {
        let level = SubdivisionLevel::clamped(n);
        let mesh = sphere_mesh(level);
        assert_eq!(mesh.vertex_count(), level.vertex_count());
        assert_eq!(mesh.triangle_count(), level.triangle_count());
        assert_eq!(mesh.positions.len(), mesh.normals.len());
    }
}

#[test]
fn all_vertices_on_unit_sphere() {
    let mesh = sphere_mesh(SubdivisionLevel::clamped(4));
    for p in &mesh.positions {
        assert!((p.truncate().length() - 1.0).abs() < TOL);
        assert_eq!(p.w, 1.0);
    }
}

#[test]
fn normals_equal_position_truncation() {
    let mesh = sphere_mesh(SubdivisionLevel::clamped(3));
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        // Exact by construction, not merely approximate.
        assert_eq!(*n, p.truncate());
    }
}

#[test]
fn winding_is_uniform_at_every_depth() {
    for n in 0..=4 {
        let mesh = sphere_mesh(SubdivisionLevel::clamped(n));
        let reference = signed_volume(mesh.triangle(0));
        assert!(reference != 0.0);
        for t in 0..mesh.triangle_count() {
            let v = signed_volume(mesh.triangle(t));
            assert!(
                v.signum() == reference.signum(),
                "triangle {t} at depth {n} flips winding"
            );
        }
    }
}

#[test]
fn level_zero_is_exact_seed_faces() {
    let a = Vec4::new(0.0, 0.0, -1.0, 1.0);
    let b = Vec4::new(0.0, 0.942809, 0.333333, 1.0);
    let c = Vec4::new(-0.816497, -0.471405, 0.333333, 1.0);
    let d = Vec4::new(0.816497, -0.471405, 0.333333, 1.0);

    let mesh = sphere_mesh(SubdivisionLevel::MIN);
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(
        mesh.positions,
        vec![a, b, c, d, c, b, a, d, b, a, c, d]
    );
}

#[test]
fn generated_mesh_validates() {
    for n in [0, 2, 5] {
        assert!(sphere_mesh(SubdivisionLevel::clamped(n)).validate().is_ok());
    }
}

fn signed_volume([a, b, c]: [Vec4; 3]) -> f32 {
    let a = a.truncate();
    let b = b.truncate();
    let c = c.truncate();
    a.dot((b - a).cross(c - a))
}

// ─── SphereMesh Tests ─────────────────────────────────────────

fn on_sphere_triangle() -> SphereMesh {
    let mut mesh = SphereMesh::with_capacity(1);
    mesh.push_triangle(
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 1.0, 1.0),
    );
    mesh
}

#[test]
fn push_triangle_counts() {
    let mesh = on_sphere_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_length_mismatch() {
    let mut mesh = on_sphere_triangle();
    mesh.normals.push(Vec3::Y);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_partial_triangle() {
    let mut mesh = on_sphere_triangle();
    mesh.positions.push(Vec4::new(1.0, 0.0, 0.0, 1.0));
    mesh.normals.push(Vec3::X);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_off_sphere_position() {
    let mut mesh = on_sphere_triangle();
    mesh.positions[1] = Vec4::new(0.0, 2.0, 0.0, 1.0);
    mesh.normals[1] = Vec3::new(0.0, 2.0, 0.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_bad_w() {
    let mut mesh = on_sphere_triangle();
    mesh.positions[0].w = 0.0;
    assert!(mesh.validate().is_err());
}

#[test]
fn flattened_upload_data() {
    let mesh = on_sphere_triangle();
    let pos = mesh.position_data();
    let nrm = mesh.normal_data();
    assert_eq!(pos.len(), 12);
    assert_eq!(nrm.len(), 9);
    assert_eq!(&pos[0..4], &[1.0, 0.0, 0.0, 1.0]);
    assert_eq!(&nrm[3..6], &[0.0, 1.0, 0.0]);
}
