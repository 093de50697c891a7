use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    PHASE_MAX, RAIN_HALF_WIDTH, RAIN_Y_MAX, RAIN_Y_MIN, SPEED_FACTOR_MAX, SPEED_FACTOR_MIN,
};
use crate::storm_error::StormError;

/// Per-drop constants sampled once when the field is built.
///
/// Positions at any later time are a pure function of these values and the
/// frame uniforms (see `rain::motion`), so nothing here changes per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropRecord {
    pub origin: Vec3,
    pub speed_factor: f32,
    pub phase: f32,
}

impl DropRecord {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let origin = Vec3::new(
            rng.gen_range(-RAIN_HALF_WIDTH..=RAIN_HALF_WIDTH),
            rng.gen_range(RAIN_Y_MIN..=RAIN_Y_MAX),
            rng.gen_range(-RAIN_HALF_WIDTH..=RAIN_HALF_WIDTH),
        );
        Self {
            origin,
            speed_factor: rng.gen_range(SPEED_FACTOR_MIN..=SPEED_FACTOR_MAX),
            phase: rng.gen_range(0.0..=PHASE_MAX),
        }
    }
}

/// The full set of drop records plus a generation stamp.
///
/// `generation` is assigned by `RainFieldState` when the field is installed;
/// the renderer compares it against the generation its mesh was built from.
#[derive(Debug, Clone, Default)]
pub struct RainField {
    drops: Vec<DropRecord>,
    generation: u64,
}

impl RainField {
    /// Sample exactly `count` drop records.
    ///
    /// Storage is reserved up front; if the reservation fails the whole call
    /// fails with [`StormError::Allocation`] and no partial field is returned.
    pub fn generate<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Result<Self, StormError> {
        let mut drops = Vec::new();
        drops
            .try_reserve_exact(count as usize)
            .map_err(|_| StormError::Allocation { requested: count })?;
        drops.extend((0..count).map(|_| DropRecord::sample(rng)));
        Ok(Self {
            drops,
            generation: 0,
        })
    }

    pub fn drops(&self) -> &[DropRecord] {
        &self.drops
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of a rebuild attempt.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainFieldEvent {
    Rebuilt { count: u32, generation: u64 },
    AllocationFailed { requested: u32 },
}

/// Live rain field and rebuild bookkeeping.
#[derive(Resource, Debug, Default)]
pub struct RainFieldState {
    field: RainField,
    /// Count whose allocation last failed. Not retried until the requested
    /// count changes.
    failed_request: Option<u32>,
}

impl RainFieldState {
    pub fn field(&self) -> &RainField {
        &self.field
    }

    pub fn generation(&self) -> u64 {
        self.field.generation
    }

    pub fn failed_request(&self) -> Option<u32> {
        self.failed_request
    }

    /// Whether a field of `requested` drops should be (re)generated.
    pub fn needs_rebuild(&self, requested: u32) -> bool {
        self.field.len() != requested as usize && self.failed_request != Some(requested)
    }

    /// Install the result of a rebuild attempt.
    ///
    /// A new field replaces the old one wholesale under the next generation.
    /// A failure keeps the old field and remembers the count that failed.
    pub fn apply(&mut self, result: Result<RainField, StormError>, requested: u32) -> RainFieldEvent {
        match result {
            Ok(mut field) => {
                field.generation = self.field.generation + 1;
                let count = field.len() as u32;
                let generation = field.generation;
                self.field = field;
                self.failed_request = None;
                RainFieldEvent::Rebuilt { count, generation }
            }
            Err(_) => self.record_failure(requested),
        }
    }

    /// Remember that storage for `requested` drops could not be reserved.
    ///
    /// Also used by the renderer when the GPU-side buffers for the live field
    /// fail, so both failures surface through the same signal.
    pub fn record_failure(&mut self, requested: u32) -> RainFieldEvent {
        self.failed_request = Some(requested);
        RainFieldEvent::AllocationFailed { requested }
    }
}
