//! Shading programs for the storm scene.
//!
//! Every material carries a single uniform block whose `Default` is a valid
//! resting state, so a material created before the first sync still renders.
//! The WGSL sources are embedded in the binary.

pub mod clouds;
pub mod desert;
pub mod rain;
pub mod road;
pub mod sky;

pub use clouds::{CloudMaterial, CloudUniform};
pub use desert::{DesertExtension, DesertMaterial, DesertUniform};
pub use rain::{RainMaterial, RainUniform, ATTRIBUTE_DROP_MOTION, ATTRIBUTE_DROP_ORIGIN};
pub use road::{RoadExtension, RoadMaterial, RoadUniform};
pub use sky::{SkyMaterial, SkyUniform};

use bevy::asset::embedded_asset;
use bevy::prelude::*;

pub struct StormMaterialsPlugin;

impl Plugin for StormMaterialsPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "shaders/sky.wgsl");
        embedded_asset!(app, "shaders/clouds.wgsl");
        embedded_asset!(app, "shaders/road.wgsl");
        embedded_asset!(app, "shaders/desert.wgsl");
        embedded_asset!(app, "shaders/rain.wgsl");

        app.add_plugins((
            MaterialPlugin::<SkyMaterial> {
                prepass_enabled: false,
                shadows_enabled: false,
                ..default()
            },
            MaterialPlugin::<CloudMaterial> {
                prepass_enabled: false,
                shadows_enabled: false,
                ..default()
            },
            MaterialPlugin::<RainMaterial> {
                prepass_enabled: false,
                shadows_enabled: false,
                ..default()
            },
            MaterialPlugin::<RoadMaterial>::default(),
            MaterialPlugin::<DesertMaterial>::default(),
        ));
    }
}
