//! Integration tests for orbis-math.

use orbis_math::{
    edge_midpoint_on_sphere, normal_matrix, perspective_deg, project_to_unit_sphere,
    rotation_y_deg, translation, Mat3, Mat4, Vec3, Vec4,
};

const TOL: f32 = 1.0e-5;

// ─── Sphere Projection Tests ──────────────────────────────────

#[test]
fn projection_yields_unit_length() {
    let p = project_to_unit_sphere(Vec4::new(3.0, -4.0, 12.0, 1.0));
    assert!((p.truncate().length() - 1.0).abs() < TOL);
}

#[test]
fn projection_resets_w() {
    let p = project_to_unit_sphere(Vec4::new(0.5, 0.5, 0.5, 7.0));
    assert_eq!(p.w, 1.0);
}

#[test]
fn projection_preserves_direction() {
    let v = Vec4::new(2.0, 0.0, 0.0, 1.0);
    let p = project_to_unit_sphere(v);
    assert!((p.x - 1.0).abs() < TOL);
    assert!(p.y.abs() < TOL);
    assert!(p.z.abs() < TOL);
}

#[test]
fn midpoint_of_axis_points() {
    let a = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let b = Vec4::new(0.0, 1.0, 0.0, 1.0);
    let m = edge_midpoint_on_sphere(a, b);
    let expected = std::f32::consts::FRAC_1_SQRT_2;
    assert!((m.x - expected).abs() < TOL);
    assert!((m.y - expected).abs() < TOL);
    assert!(m.z.abs() < TOL);
    assert_eq!(m.w, 1.0);
}

// ─── Matrix Construction Tests ────────────────────────────────

#[test]
fn identity_law() {
    let m = translation(1.5, -2.0, 0.25) * rotation_y_deg(37.0);
    assert!((Mat4::IDENTITY * m).abs_diff_eq(m, TOL));
    assert!((m * Mat4::IDENTITY).abs_diff_eq(m, TOL));
}

#[test]
fn rotation_y_quarter_turn() {
    // Rotating +X about Y by 90° lands on -Z (right-hand rule).
    let r = rotation_y_deg(90.0);
    let p = r.transform_point3(Vec3::X);
    assert!(p.x.abs() < TOL);
    assert!(p.y.abs() < TOL);
    assert!((p.z + 1.0).abs() < TOL);
}

#[test]
fn translation_moves_points() {
    let t = translation(0.0, 0.0, -3.0);
    let p = t.transform_point3(Vec3::ZERO);
    assert!((p.z + 3.0).abs() < TOL);
}

#[test]
fn rotate_then_translate_ordering() {
    // translation × rotation applies the rotation first.
    let mv = translation(0.0, 0.0, -3.0) * rotation_y_deg(90.0);
    let p = mv.transform_point3(Vec3::X);
    assert!(p.x.abs() < TOL);
    assert!((p.z + 4.0).abs() < TOL);
}

#[test]
fn perspective_matches_gl_layout() {
    // f = 1 / tan(45° / 2), near = 0.1, far = 10.0, aspect = 1.
    let m = perspective_deg(45.0, 1.0, 0.1, 10.0).to_cols_array();
    let f = 1.0 / (45.0_f32.to_radians() / 2.0).tan();
    let nf = 1.0 / (0.1 - 10.0);
    assert!((m[0] - f).abs() < TOL);
    assert!((m[5] - f).abs() < TOL);
    assert!((m[10] - (10.0 + 0.1) * nf).abs() < TOL);
    assert!((m[11] + 1.0).abs() < TOL);
    assert!((m[14] - 2.0 * 10.0 * 0.1 * nf).abs() < TOL);
    assert!(m[15].abs() < TOL);
}

#[test]
fn perspective_aspect_scales_x() {
    let square = perspective_deg(45.0, 1.0, 0.1, 10.0).to_cols_array();
    let wide = perspective_deg(45.0, 2.0, 0.1, 10.0).to_cols_array();
    assert!((wide[0] - square[0] / 2.0).abs() < TOL);
    assert!((wide[5] - square[5]).abs() < TOL);
}

// ─── Normal Matrix Tests ──────────────────────────────────────

#[test]
fn normal_matrix_of_identity() {
    assert_eq!(normal_matrix(&Mat4::IDENTITY), Mat3::IDENTITY);
}

#[test]
fn normal_matrix_drops_translation() {
    let mv = translation(5.0, 6.0, 7.0) * rotation_y_deg(30.0);
    let n = normal_matrix(&mv);
    let r = Mat3::from_mat4(rotation_y_deg(30.0));
    assert!(n.abs_diff_eq(r, TOL));
}

#[test]
fn normal_matrix_rotates_normals_like_positions() {
    // With rotation-only transforms, normals follow positions exactly.
    let mv = translation(0.0, 0.0, -3.0) * rotation_y_deg(60.0);
    let n = normal_matrix(&mv);
    let v = Vec3::new(0.0, 0.0, 1.0);
    let by_normal = n * v;
    let by_position = mv.transform_vector3(v);
    assert!(by_normal.abs_diff_eq(by_position, TOL));
}
