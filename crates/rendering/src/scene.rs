//! Storm scene assembly: camera, lights, road, desert, rocks, sky and clouds.
//!
//! Runs once at startup. The rain entity is spawned later by
//! `rain_mesh::rebuild_rain_mesh` once the first drop field exists.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use rand::Rng;
use simulation::camera_rig::CameraRig;
use simulation::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use simulation::sim_rng::SimRng;
use simulation::StormParams;

use crate::lighting::{ambient_brightness, key_illuminance, AMBIENT_COLOR, KEY_COLOR};
use crate::materials::{
    desert::desert_base, road::road_base, CloudMaterial, DesertExtension, DesertMaterial,
    RainMaterial, RoadExtension, RoadMaterial, SkyMaterial,
};

// =============================================================================
// Markers and handles
// =============================================================================

#[derive(Component)]
pub struct StormCamera;

/// Directional key light; brightens with every flash.
#[derive(Component)]
pub struct KeyLight;

/// Point light high over the road that only shines during a flash.
#[derive(Component)]
pub struct FlashLight;

/// The single entity drawing every rain drop.
#[derive(Component)]
pub struct RainVolume;

/// Handles of the materials the synchronizer writes each frame.
#[derive(Resource, Debug, Clone)]
pub struct StormMaterials {
    pub sky: Handle<SkyMaterial>,
    pub clouds: Handle<CloudMaterial>,
    pub road: Handle<RoadMaterial>,
    pub desert: Handle<DesertMaterial>,
    pub rain: Handle<RainMaterial>,
}

// =============================================================================
// Layout
// =============================================================================

const SKY_RADIUS: f32 = 150.0;
const CLOUD_RADIUS: f32 = 145.0;

const ROAD_WIDTH: f32 = 8.0;
const ROAD_LENGTH: f32 = 300.0;
const ROAD_CENTER_Z: f32 = -50.0;
const ROAD_Y: f32 = -0.5;

const DESERT_WIDTH: f32 = 38.0;
const DESERT_LENGTH: f32 = 400.0;
const DESERT_OFFSET_X: f32 = 22.0;
const DESERT_Y: f32 = -0.52;

pub const ROCK_COUNT: usize = 50;
const ROCK_MIN_X: f32 = 15.0;
const ROCK_SPREAD_X: f32 = 30.0;
const ROCK_SPREAD_Z: f32 = 300.0;

const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, 5.0);
pub(crate) const FLASH_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 35.0, -40.0);
const FLASH_LIGHT_RANGE: f32 = 200.0;

/// Where one rock sits on the desert floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockPlacement {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
}

/// Scatter `count` rocks on both sides of the road, clear of the asphalt.
pub fn scatter_rocks<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<RockPlacement> {
    (0..count)
        .map(|_| {
            let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let x = side * (ROCK_MIN_X + rng.gen::<f32>() * ROCK_SPREAD_X);
            let z = (rng.gen::<f32>() - 0.5) * ROCK_SPREAD_Z;
            let scale = rng.gen_range(0.5..2.0);
            let yaw = rng.gen_range(0.0..std::f32::consts::TAU);
            RockPlacement {
                // Half buried so the flat bottom never floats
                position: Vec3::new(x, DESERT_Y + scale * 0.3, z),
                scale,
                yaw,
            }
        })
        .collect()
}

// =============================================================================
// Startup
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn setup_storm_scene(
    mut commands: Commands,
    params: Res<StormParams>,
    rig: Res<CameraRig>,
    mut rng: ResMut<SimRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard: ResMut<Assets<StandardMaterial>>,
    mut sky_materials: ResMut<Assets<SkyMaterial>>,
    mut cloud_materials: ResMut<Assets<CloudMaterial>>,
    mut road_materials: ResMut<Assets<RoadMaterial>>,
    mut desert_materials: ResMut<Assets<DesertMaterial>>,
    mut rain_materials: ResMut<Assets<RainMaterial>>,
) {
    // --- Camera ---
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(rig.current).looking_at(Vec3::ZERO, Vec3::Y),
        StormCamera,
    ));

    // --- Lights ---
    commands.spawn((
        DirectionalLight {
            illuminance: key_illuminance(&params),
            color: KEY_COLOR,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
    ));
    commands.spawn((
        PointLight {
            intensity: 0.0,
            range: FLASH_LIGHT_RANGE,
            color: KEY_COLOR,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(FLASH_LIGHT_POSITION),
        Visibility::Hidden,
        FlashLight,
    ));
    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: ambient_brightness(&params),
    });

    // --- Road ---
    let road = road_materials.add(RoadMaterial {
        base: road_base(params.ground.wetness_roughness),
        extension: RoadExtension::default(),
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROAD_WIDTH, ROAD_LENGTH))),
        MeshMaterial3d(road.clone()),
        Transform::from_xyz(0.0, ROAD_Y, ROAD_CENTER_Z),
    ));

    // --- Desert floor ---
    let desert = desert_materials.add(DesertMaterial {
        base: desert_base(),
        extension: DesertExtension::default(),
    });
    let desert_mesh = meshes.add(Plane3d::default().mesh().size(DESERT_WIDTH, DESERT_LENGTH));
    for side in [-1.0, 1.0] {
        commands.spawn((
            Mesh3d(desert_mesh.clone()),
            MeshMaterial3d(desert.clone()),
            Transform::from_xyz(side * DESERT_OFFSET_X, DESERT_Y, 0.0),
        ));
    }

    // --- Rocks ---
    let rock_mesh = meshes.add(Sphere::new(1.0).mesh().uv(7, 5));
    let rock_material = standard.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.18, 0.15),
        perceptual_roughness: 0.95,
        metallic: 0.0,
        ..default()
    });
    let mut scatter_rng = rng.fork();
    for rock in scatter_rocks(&mut scatter_rng, ROCK_COUNT) {
        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(rock.position)
                .with_rotation(Quat::from_rotation_y(rock.yaw))
                .with_scale(Vec3::new(rock.scale, rock.scale * 0.7, rock.scale)),
        ));
    }

    // --- Sky dome and clouds ---
    let sky = sky_materials.add(SkyMaterial::default());
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(sky.clone()),
        NotShadowCaster,
    ));
    let clouds = cloud_materials.add(CloudMaterial::default());
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(CLOUD_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(clouds.clone()),
        NotShadowCaster,
    ));

    let rain = rain_materials.add(RainMaterial::default());

    commands.insert_resource(StormMaterials {
        sky,
        clouds,
        road,
        desert,
        rain,
    });

    info!("Storm scene assembled ({ROCK_COUNT} rocks)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rocks_stay_off_the_road() {
        let mut rng = SimRng::from_seed_u64(8);
        let rocks = scatter_rocks(&mut rng.0, 500);
        assert_eq!(rocks.len(), 500);
        for rock in &rocks {
            let x = rock.position.x.abs();
            assert!(x >= ROCK_MIN_X && x <= ROCK_MIN_X + ROCK_SPREAD_X, "x = {x}");
            assert!(rock.position.z.abs() <= ROCK_SPREAD_Z / 2.0);
            assert!((0.5..2.0).contains(&rock.scale));
            assert!(x > ROAD_WIDTH / 2.0);
        }
    }

    #[test]
    fn test_rocks_on_both_sides() {
        let mut rng = SimRng::from_seed_u64(9);
        let rocks = scatter_rocks(&mut rng.0, ROCK_COUNT);
        assert!(rocks.iter().any(|r| r.position.x < 0.0));
        assert!(rocks.iter().any(|r| r.position.x > 0.0));
    }

    #[test]
    fn test_scatter_is_seeded() {
        let a = scatter_rocks(&mut SimRng::from_seed_u64(3).0, 20);
        let b = scatter_rocks(&mut SimRng::from_seed_u64(3).0, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scene_fits_inside_far_plane() {
        assert!(SKY_RADIUS < CAMERA_FAR);
        assert!(CLOUD_RADIUS < SKY_RADIUS);
    }
}
