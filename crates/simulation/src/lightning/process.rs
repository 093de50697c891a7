use bevy::prelude::*;
use rand::Rng;

use crate::config::THUNDER_THRESHOLD;
use crate::sim_clock::SimClock;
use crate::sim_rng::SimRng;
use crate::storm_params::{LightningParams, StormParams};

/// Sent on the frame a flash fires.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LightningStrike {
    /// Simulation time of the strike.
    pub time: f32,
    /// Starting intensity of the flash.
    pub intensity: f32,
}

/// Whether the frequency floor has elapsed since the last flash at time `t`.
#[inline]
pub fn flash_window_open(params: &LightningParams, t: f32) -> bool {
    params.enabled && t - params.last_flash_time > params.frequency_floor
}

/// Advance the flash process by one frame.
///
/// 1. When the window is open, one Bernoulli draw decides whether a new flash
///    fires. A closed window draws nothing from `rng`.
/// 2. A non-zero intensity is multiplied by the decay rate and snaps to zero
///    once it drops under the profile epsilon.
///
/// Decay runs even while lightning is disabled so a flash in progress fades
/// out. Returns the strike if one fired this frame.
pub fn step_lightning<R: Rng + ?Sized>(
    params: &mut LightningParams,
    t: f32,
    rng: &mut R,
) -> Option<LightningStrike> {
    let profile = params.profile();
    let mut strike = None;

    if flash_window_open(params, t) && rng.gen_bool(profile.flash_probability) {
        let intensity = rng.gen_range(profile.min_intensity..=profile.max_intensity);
        params.intensity = intensity;
        params.last_flash_time = params.last_flash_time.max(t);
        strike = Some(LightningStrike { time: t, intensity });
    }

    if params.intensity > 0.0 {
        params.intensity *= profile.decay_rate;
        if params.intensity < profile.epsilon {
            params.intensity = 0.0;
        }
    }

    strike
}

/// System: run one lightning step against the store.
pub fn update_lightning(
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    mut params: ResMut<StormParams>,
    mut strikes: EventWriter<LightningStrike>,
) {
    // Skip the mutable borrow on idle frames that cannot flash.
    if !params.lightning.is_flashing() && !flash_window_open(&params.lightning, clock.elapsed) {
        return;
    }

    if let Some(strike) = step_lightning(&mut params.lightning, clock.elapsed, &mut rng.0) {
        debug!(
            "Lightning strike at t={:.2}s, intensity {:.2}",
            strike.time, strike.intensity
        );
        strikes.send(strike);
    }
}

/// System: report strikes bright enough to be heard.
pub fn report_thunder(mut strikes: EventReader<LightningStrike>) {
    for strike in strikes.read() {
        if strike.intensity >= THUNDER_THRESHOLD {
            info!(
                "Thunder: strike at t={:.2}s (intensity {:.1})",
                strike.time, strike.intensity
            );
        }
    }
}
