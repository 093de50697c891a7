use bevy::prelude::*;

/// Simulation clock read by every storm system.
///
/// Mirrors the host's virtual time once per frame so the storm logic never
/// touches `Time` directly and tests can drive it with a fixed step.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimClock {
    /// Seconds since startup.
    pub elapsed: f32,
    /// Number of frames advanced so far.
    pub frame: u64,
}

impl SimClock {
    pub fn advance_to(&mut self, elapsed: f32) {
        self.elapsed = self.elapsed.max(elapsed);
        self.frame = self.frame.wrapping_add(1);
    }
}

pub fn advance_sim_clock(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.advance_to(time.elapsed_secs());
}
