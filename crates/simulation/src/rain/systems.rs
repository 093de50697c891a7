use bevy::prelude::*;

use super::field::{RainField, RainFieldEvent, RainFieldState};
use crate::sim_rng::SimRng;
use crate::storm_params::StormParams;

/// System: regenerate the drop records when the requested count changes.
///
/// The old field stays live until the new one is fully built. A count whose
/// allocation failed is not retried every frame.
pub fn rebuild_rain_field(
    params: Res<StormParams>,
    mut state: ResMut<RainFieldState>,
    mut rng: ResMut<SimRng>,
    mut events: EventWriter<RainFieldEvent>,
) {
    let requested = params.rain.particle_count;
    if !state.needs_rebuild(requested) {
        return;
    }

    let result = RainField::generate(requested, &mut rng.0);
    let event = state.apply(result, requested);
    match event {
        RainFieldEvent::Rebuilt { count, generation } => {
            info!("Rain field rebuilt: {count} drops (generation {generation})");
        }
        RainFieldEvent::AllocationFailed { requested } => {
            error!(
                "Rain field allocation failed for {requested} drops; keeping {} existing drops",
                state.field().len()
            );
        }
    }
    events.send(event);
}
