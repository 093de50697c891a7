//! Static ranges, defaults and geometry of the storm scene.
//!
//! The `*_RANGE` constants are the configuration surface exposed to the
//! debug panel. `StormParams::sanitize` clamps into the same ranges.

use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Rain
// ---------------------------------------------------------------------------

pub const DEFAULT_FALL_SPEED: f32 = 15.0;
pub const FALL_SPEED_RANGE: RangeInclusive<f32> = 1.0..=30.0;

pub const DEFAULT_PARTICLE_COUNT: u32 = 20_000;
pub const MIN_PARTICLE_COUNT: u32 = 1_000;
pub const MAX_PARTICLE_COUNT: u32 = 50_000;

pub const DEFAULT_WIND_STRENGTH: f32 = 2.0;
pub const WIND_STRENGTH_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Half extent of the rain volume on the X and Z axes.
pub const RAIN_HALF_WIDTH: f32 = 50.0;
/// Lowest Y of the rain volume.
pub const RAIN_Y_MIN: f32 = -25.0;
/// Highest Y of the rain volume.
pub const RAIN_Y_MAX: f32 = 25.0;
/// Vertical distance a drop covers in one fall loop.
pub const FALL_DISTANCE: f32 = RAIN_Y_MAX - RAIN_Y_MIN;

pub const SPEED_FACTOR_MIN: f32 = 0.8;
pub const SPEED_FACTOR_MAX: f32 = 1.2;
pub const PHASE_MAX: f32 = 100.0;

// ---------------------------------------------------------------------------
// Lightning
// ---------------------------------------------------------------------------

pub const DEFAULT_FREQUENCY_FLOOR: f32 = 3.0;
pub const FREQUENCY_FLOOR_RANGE: RangeInclusive<f32> = 0.5..=10.0;

/// Flashes at or above this intensity are reported as audible thunder.
pub const THUNDER_THRESHOLD: f32 = 5.0;

// ---------------------------------------------------------------------------
// Atmosphere
// ---------------------------------------------------------------------------

pub const DEFAULT_FOG_DENSITY: f32 = 0.08;
pub const FOG_DENSITY_RANGE: RangeInclusive<f32> = 0.0..=0.3;

pub const DEFAULT_FOG_HEIGHT_SCALE: f32 = 20.0;
pub const FOG_HEIGHT_SCALE_RANGE: RangeInclusive<f32> = 1.0..=100.0;

pub const DEFAULT_FOG_COLOR: [f32; 3] = [0.1, 0.12, 0.15];

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

pub const DEFAULT_DAMPING_FACTOR: f32 = 0.05;
/// Range offered by the debug panel.
pub const DAMPING_FACTOR_UI_RANGE: RangeInclusive<f32> = 0.01..=0.2;
/// Range accepted by the camera controller itself.
pub const DAMPING_FACTOR_RANGE: RangeInclusive<f32> = 0.01..=1.0;

/// Pointer-to-offset scale on X.
pub const POINTER_SCALE_X: f32 = 2.0;
/// Pointer-to-offset scale on Y.
pub const POINTER_SCALE_Y: f32 = 1.0;

pub const CAMERA_BASE_Y: f32 = 2.0;
pub const CAMERA_BASE_Z: f32 = 15.0;
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// ---------------------------------------------------------------------------
// Ground and scene
// ---------------------------------------------------------------------------

pub const DEFAULT_WETNESS_ROUGHNESS: f32 = 0.1;
pub const WETNESS_ROUGHNESS_RANGE: RangeInclusive<f32> = 0.0..=1.0;

pub const DEFAULT_BRIGHTNESS: f32 = 0.3;
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.0..=2.0;
