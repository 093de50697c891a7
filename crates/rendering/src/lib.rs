use bevy::prelude::*;

use simulation::StormSet;

pub mod input;
pub mod lighting;
pub mod materials;
pub mod rain_mesh;
pub mod scene;
pub mod screenshot;
pub mod sync;

/// Scene, materials and the per-frame sync from simulation state to the GPU.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((materials::StormMaterialsPlugin, screenshot::ScreenshotPlugin))
            .init_resource::<rain_mesh::RainMeshState>()
            .add_systems(Startup, scene::setup_storm_scene)
            .add_systems(
                Update,
                input::update_pointer_input
                    .in_set(StormSet::Input)
                    .before(simulation::camera_rig::read_pointer_offset),
            )
            .add_systems(
                Update,
                (
                    rain_mesh::rebuild_rain_mesh,
                    (
                        sync::sync_sky_material,
                        sync::sync_cloud_material,
                        sync::sync_road_material,
                        sync::sync_desert_material,
                        sync::sync_rain_material,
                        lighting::apply_camera_rig,
                        lighting::apply_storm_lighting,
                        lighting::update_storm_fog,
                        lighting::update_bloom,
                        lighting::apply_rain_visibility,
                    ),
                )
                    .chain()
                    .in_set(StormSet::Sync),
            );
    }
}
