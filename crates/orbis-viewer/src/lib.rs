//! Orbis real-time viewer using Bevy.
//!
//! Renders the subdivided sphere on a turntable. ArrowUp/ArrowDown
//! raise/lower the subdivision depth live; each change rebuilds the
//! mesh in full before it is published to the render world. All mesh
//! and transform math comes from the core crates — this crate only
//! uploads buffers and reacts to input.

use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

use orbis_camera::TurntableState;
use orbis_mesh::{sphere_mesh, SphereMesh, SubdivisionLevel};

/// Viewer state: current subdivision level and turntable rotation.
#[derive(Resource)]
struct SphereState {
    level: SubdivisionLevel,
    turntable: TurntableState,
}

/// Component to tag the sphere entity.
#[derive(Component)]
struct SphereSurface;

/// Launch the Bevy viewer at the given subdivision level.
pub fn launch_viewer(level: SubdivisionLevel) -> Result<(), Box<dyn std::error::Error>> {
    println!("Initializing Bevy viewer (level {level})...");

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("Orbis Viewer - level {level}"),
            resolution: (1280., 720.).into(),
            ..default()
        }),
        ..default()
    }));
    app.add_plugins(PanOrbitCameraPlugin);

    app.insert_resource(SphereState {
        level,
        turntable: TurntableState::new(),
    });
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08))); // Dark background

    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, (rotate_sphere, adjust_subdivision));

    app.run();

    Ok(())
}

/// Converts a sphere mesh into a non-indexed Bevy triangle list.
fn build_render_mesh(mesh: &SphereMesh) -> Mesh {
    let n = mesh.vertex_count();
    let mut positions = Vec::with_capacity(n);
    let mut normals = Vec::with_capacity(n);
    let mut uvs = Vec::with_capacity(n);

    for (p, normal) in mesh.positions.iter().zip(&mesh.normals) {
        // Bevy's position attribute is Float32x3; w is always 1 here.
        positions.push([p.x, p.y, p.z]);
        normals.push(normal.to_array());
        uvs.push([0.0_f32, 0.0_f32]); // Dummy UVs for StandardMaterial
    }

    let mut render_mesh = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    render_mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    render_mesh
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SphereState>,
) {
    // 1. Sphere mesh
    let render_mesh = build_render_mesh(&sphere_mesh(state.level));

    let sphere_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.3, 0.8), // Matches the reference material
        perceptual_roughness: 0.4,
        metallic: 0.05,
        double_sided: true,
        cull_mode: None, // Winding convention differs from Bevy's default
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(render_mesh),
            material: sphere_material,
            ..default()
        },
        SphereSurface,
    ));

    // 2. Key light, placed at the reference light position
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10000.0,
            ..default()
        },
        transform: Transform::from_xyz(2.0, 2.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // 3. Fill light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
    });

    // 4. Camera at the reference viewing distance
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(3.0),
            ..default()
        },
    ));
}

/// Advances the turntable and applies the rotation to the sphere.
fn rotate_sphere(
    time: Res<Time>,
    mut state: ResMut<SphereState>,
    mut query: Query<&mut Transform, With<SphereSurface>>,
) {
    state.turntable.advance(time.delta_seconds());
    let rotation = Quat::from_rotation_y(state.turntable.angle_deg.to_radians());
    for mut transform in &mut query {
        transform.rotation = rotation;
    }
}

/// ArrowUp/ArrowDown change the subdivision depth, clamped to [0, 6].
///
/// The replacement mesh is built completely before it is swapped in, so
/// the renderer never observes a partially rebuilt buffer.
fn adjust_subdivision(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SphereState>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Handle<Mesh>, With<SphereSurface>>,
) {
    let mut requested = state.level;
    if keys.just_pressed(KeyCode::ArrowUp) {
        requested = requested.finer();
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        requested = requested.coarser();
    }
    if requested == state.level {
        return;
    }

    state.level = requested;
    let rebuilt = build_render_mesh(&sphere_mesh(requested));

    if let Ok(handle) = query.get_single() {
        if let Some(mesh) = meshes.get_mut(handle) {
            *mesh = rebuilt;
        }
    }

    info!("subdivision level: {}", state.level);
}
