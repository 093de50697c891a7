use bevy::prelude::*;

pub mod camera_rig;
pub mod config;
pub mod lightning;
pub mod rain;
pub mod sim_clock;
pub mod sim_rng;
pub mod simulation_sets;
pub mod storm_config;
pub mod storm_error;
pub mod storm_params;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::StormSet;
pub use storm_error::StormError;
pub use storm_params::StormParams;

/// Storm core: parameter store, clock, RNG, camera controller, lightning and
/// rain field. Contains no rendering; the rendering crate reads the resulting
/// resources in `StormSet::Sync`.
///
/// Resources inserted before this plugin (e.g. `StormParams` or `SimRng` built
/// from a config file) are kept as-is.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        simulation_sets::configure_storm_sets(app);

        app.init_resource::<StormParams>()
            .init_resource::<sim_clock::SimClock>()
            .init_resource::<camera_rig::PointerInput>()
            .init_resource::<camera_rig::CameraRig>()
            .add_systems(
                Update,
                (
                    sim_clock::advance_sim_clock,
                    camera_rig::read_pointer_offset,
                    storm_params::sanitize_params,
                )
                    .chain()
                    .in_set(StormSet::Input),
            )
            .add_systems(
                Update,
                camera_rig::update_camera_rig
                    .in_set(StormSet::Simulate)
                    .before(lightning::update_lightning),
            );

        app.add_plugins((
            sim_rng::SimRngPlugin,
            lightning::LightningPlugin,
            rain::RainPlugin,
        ));
    }
}
