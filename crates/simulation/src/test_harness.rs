//! # TestStorm: headless test harness for the storm core
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `SimulationPlugin` and drives
//! it with a fixed frame step, so tests can run the real per-frame schedule
//! without a window, renderer or wall clock.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::camera_rig::{CameraRig, PointerInput};
use crate::lightning::LightningStrike;
use crate::rain::{RainFieldEvent, RainFieldState};
use crate::sim_clock::SimClock;
use crate::sim_rng::{SimRng, DEFAULT_SEED};
use crate::simulation_sets::StormSet;
use crate::storm_params::StormParams;
use crate::SimulationPlugin;

/// Every event of type `E` seen since the harness was created.
#[derive(Resource)]
pub struct EventLog<E: Event + Clone>(pub Vec<E>);

impl<E: Event + Clone> Default for EventLog<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record_events<E: Event + Clone>(mut reader: EventReader<E>, mut log: ResMut<EventLog<E>>) {
    log.0.extend(reader.read().cloned());
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestStorm {
    app: App,
}

impl Default for TestStorm {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStorm {
    /// Fixed duration of one harness frame (60 Hz).
    pub const FRAME: Duration = Duration::from_nanos(16_666_667);

    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a storm whose randomness is seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Self::FRAME));

        // Insert the RNG BEFORE SimulationPlugin so init_resource keeps it.
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);

        app.init_resource::<EventLog<LightningStrike>>()
            .init_resource::<EventLog<RainFieldEvent>>()
            .add_systems(
                Update,
                (
                    record_events::<LightningStrike>,
                    record_events::<RainFieldEvent>,
                )
                    .after(StormSet::Simulate),
            );

        // The first update only initializes the clock (zero delta); run it here
        // so every later frame advances by exactly `FRAME`.
        app.update();

        Self { app }
    }

    /// Replace the parameter store before the first driven frame.
    pub fn with_params(mut self, params: StormParams) -> Self {
        self.app.insert_resource(params);
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run one frame with the pointer at `pointer` (normalized, y up), or
    /// outside the window when `None`.
    pub fn frame(&mut self, pointer: Option<Vec2>) {
        self.app.world_mut().resource_mut::<PointerInput>().0 = pointer;
        self.app.update();
    }

    /// Run `n` frames with the same pointer state.
    pub fn frames(&mut self, n: u32, pointer: Option<Vec2>) {
        for _ in 0..n {
            self.frame(pointer);
        }
    }

    /// Run whole seconds of frames with the pointer outside the window.
    pub fn run_seconds(&mut self, seconds: u32) {
        self.frames(seconds * 60, None);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn params(&self) -> &StormParams {
        self.resource::<StormParams>()
    }

    pub fn params_mut(&mut self) -> Mut<'_, StormParams> {
        self.app.world_mut().resource_mut::<StormParams>()
    }

    pub fn rig(&self) -> &CameraRig {
        self.resource::<CameraRig>()
    }

    pub fn rain(&self) -> &RainFieldState {
        self.resource::<RainFieldState>()
    }

    pub fn elapsed(&self) -> f32 {
        self.resource::<SimClock>().elapsed
    }

    pub fn strikes(&self) -> &[LightningStrike] {
        &self.resource::<EventLog<LightningStrike>>().0
    }

    pub fn rain_events(&self) -> &[RainFieldEvent] {
        &self.resource::<EventLog<RainFieldEvent>>().0
    }

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
