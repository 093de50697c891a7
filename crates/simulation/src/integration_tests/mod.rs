//! Integration tests for the storm core using the `TestStorm` harness.
//!
//! These tests spin up a headless Bevy App with `SimulationPlugin` and verify
//! behavior across the Input → Simulate chain frame by frame.

mod camera_tests;
mod lightning_tests;
mod rain_tests;
