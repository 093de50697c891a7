//! Rain field simulator.
//!
//! The host samples one `DropRecord` per drop when the field is built and
//! never touches them again; the vertex shader animates every drop from the
//! frame uniforms. Changing the particle count throws the field away and
//! builds a new one.

pub mod field;
pub mod motion;
pub mod systems;

pub use field::{DropRecord, RainField, RainFieldEvent, RainFieldState};
pub use motion::{
    drop_alpha, drop_position, fall_offset, loop_period, smoothstep, wrap_height, FADE_END,
    FADE_START, WIND_LEAN, WIND_SWAY,
};
pub use systems::rebuild_rain_field;

use bevy::prelude::*;

use crate::simulation_sets::StormSet;

pub struct RainPlugin;

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainFieldState>()
            .add_event::<RainFieldEvent>()
            .add_systems(
                Update,
                // Lightning draws from SimRng first so the stream order is fixed.
                rebuild_rain_field
                    .in_set(StormSet::Simulate)
                    .after(crate::lightning::update_lightning),
            );
    }
}
