//! Per-frame ordering of the storm pipeline via `SystemSet` phases.
//!
//! ```text
//! Input  →  Simulate  →  Sync
//! ```
//!
//! * **Input**: Advance `SimClock`, read the pointer, clamp `StormParams`.
//! * **Simulate**: Camera controller step, lightning step, rain field
//!   rebuild. Everything here may write `StormParams`.
//! * **Sync**: Push the frame's final state into shader uniforms, lights,
//!   fog and the camera transform. Reads only; running after `Simulate` means
//!   the GPU sees this frame's flash and camera with no one-frame lag.
//!
//! All three run in `Update`; Bevy's render app draws afterwards.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StormSet {
    Input,
    Simulate,
    Sync,
}

pub(crate) fn configure_storm_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (StormSet::Input, StormSet::Simulate, StormSet::Sync).chain(),
    );
}
