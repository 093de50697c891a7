//! Lightning flash process.
//!
//! A two-state intensity process: **Idle** (`intensity == 0`) waits for the
//! frequency floor to pass, then each frame rolls a fixed-probability
//! Bernoulli trial. A success jumps to **Decaying** with a random starting
//! intensity that fades geometrically back to zero.
//!
//! Because the trigger is re-rolled every frame rather than scheduled, the
//! expected gap between flashes is only approximately
//! `frequency_floor + 1 / flash_probability` frames of wall time, and it
//! stretches or shrinks with the frame rate.

pub mod process;
pub mod profile;

pub use process::{
    flash_window_open, report_thunder, step_lightning, update_lightning, LightningStrike,
};
pub use profile::{LightningPreset, LightningProfile};

use bevy::prelude::*;

use crate::simulation_sets::StormSet;

pub struct LightningPlugin;

impl Plugin for LightningPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LightningStrike>().add_systems(
            Update,
            (update_lightning, report_thunder)
                .chain()
                .in_set(StormSet::Simulate),
        );
    }
}
