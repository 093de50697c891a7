//! The storm parameter store.
//!
//! `StormParams` is the single source of truth for every simulation input and
//! output. The debug panel and config file write to it, the simulation systems
//! read and write it, and the synchronizer reads it to build shader uniforms.
//! It is an ordinary Bevy resource: each system receives it explicitly through
//! `Res`/`ResMut`, and Bevy serializes conflicting access, so there is no
//! locking and field-level last-write-wins.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::lightning::{LightningPreset, LightningProfile};

// =============================================================================
// Groups
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningParams {
    /// Current flash brightness. Runtime state, never persisted.
    #[serde(skip)]
    pub intensity: f32,
    /// Minimum seconds between two flashes.
    pub frequency_floor: f32,
    /// Simulation time of the most recent flash. Runtime state.
    #[serde(skip)]
    pub last_flash_time: f32,
    pub enabled: bool,
    pub preset: LightningPreset,
}

impl Default for LightningParams {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            frequency_floor: DEFAULT_FREQUENCY_FLOOR,
            last_flash_time: 0.0,
            enabled: true,
            preset: LightningPreset::Classic,
        }
    }
}

impl LightningParams {
    pub fn profile(&self) -> LightningProfile {
        self.preset.profile()
    }

    /// Whether a flash is currently fading out.
    pub fn is_flashing(&self) -> bool {
        self.intensity > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainParams {
    pub fall_speed: f32,
    /// Number of drops. Changing it rebuilds the whole particle buffer.
    pub particle_count: u32,
    pub wind_strength: f32,
    pub enabled: bool,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            fall_speed: DEFAULT_FALL_SPEED,
            particle_count: DEFAULT_PARTICLE_COUNT,
            wind_strength: DEFAULT_WIND_STRENGTH,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogParams {
    pub density: f32,
    pub height_scale: f32,
    pub color: [f32; 3],
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            density: DEFAULT_FOG_DENSITY,
            height_scale: DEFAULT_FOG_HEIGHT_SCALE,
            color: DEFAULT_FOG_COLOR,
        }
    }
}

impl FogParams {
    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Lerp factor applied every frame; 1.0 snaps to the target.
    pub damping_factor: f32,
    /// Pointer-derived target offset. Runtime state.
    #[serde(skip)]
    pub offset: Vec2,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            offset: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundParams {
    pub wetness_roughness: f32,
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            wetness_roughness: DEFAULT_WETNESS_ROUGHNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub brightness: f32,
    pub post_processing_enabled: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            post_processing_enabled: true,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormParams {
    pub lightning: LightningParams,
    pub rain: RainParams,
    pub fog: FogParams,
    pub camera: CameraParams,
    pub ground: GroundParams,
    pub scene: SceneParams,
}

/// Clamp `value` into `range`, replacing NaN with `fallback`.
fn clamp_or(value: f32, range: std::ops::RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

impl StormParams {
    /// Clamp every field into its safe range.
    ///
    /// Out-of-range input is corrected rather than rejected: a negative fall
    /// speed becomes the minimum fall speed, a zero particle count becomes the
    /// minimum count, NaN becomes the default. Returns `true` if anything
    /// changed.
    pub fn sanitize(&mut self) -> bool {
        let before = self.clone();

        let l = &mut self.lightning;
        l.frequency_floor = clamp_or(
            l.frequency_floor,
            FREQUENCY_FLOOR_RANGE,
            DEFAULT_FREQUENCY_FLOOR,
        );
        if !l.intensity.is_finite() || l.intensity < 0.0 {
            l.intensity = 0.0;
        }
        if !l.last_flash_time.is_finite() {
            l.last_flash_time = 0.0;
        }

        let r = &mut self.rain;
        r.fall_speed = clamp_or(r.fall_speed, FALL_SPEED_RANGE, DEFAULT_FALL_SPEED);
        r.particle_count = r
            .particle_count
            .clamp(MIN_PARTICLE_COUNT, MAX_PARTICLE_COUNT);
        r.wind_strength = clamp_or(r.wind_strength, WIND_STRENGTH_RANGE, DEFAULT_WIND_STRENGTH);

        let f = &mut self.fog;
        f.density = clamp_or(f.density, FOG_DENSITY_RANGE, DEFAULT_FOG_DENSITY);
        f.height_scale = clamp_or(
            f.height_scale,
            FOG_HEIGHT_SCALE_RANGE,
            DEFAULT_FOG_HEIGHT_SCALE,
        );
        for (channel, default) in f.color.iter_mut().zip(DEFAULT_FOG_COLOR) {
            *channel = clamp_or(*channel, 0.0..=1.0, default);
        }

        let c = &mut self.camera;
        c.damping_factor = clamp_or(
            c.damping_factor,
            DAMPING_FACTOR_RANGE,
            DEFAULT_DAMPING_FACTOR,
        );
        if !c.offset.is_finite() {
            c.offset = Vec2::ZERO;
        }

        self.ground.wetness_roughness = clamp_or(
            self.ground.wetness_roughness,
            WETNESS_ROUGHNESS_RANGE,
            DEFAULT_WETNESS_ROUGHNESS,
        );
        self.scene.brightness = clamp_or(self.scene.brightness, BRIGHTNESS_RANGE, DEFAULT_BRIGHTNESS);

        *self != before
    }
}

/// System: clamp the store once per frame, before any simulation step reads it.
///
/// Only takes the mutable borrow when something is actually out of range, so
/// Bevy change detection stays quiet on ordinary frames.
pub fn sanitize_params(mut params: ResMut<StormParams>) {
    let mut copy = params.clone();
    if copy.sanitize() {
        warn!("StormParams: out-of-range values clamped");
        *params = copy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_configuration_surface() {
        let p = StormParams::default();
        assert_eq!(p.rain.fall_speed, 15.0);
        assert_eq!(p.rain.particle_count, 20_000);
        assert!(p.rain.enabled);
        assert_eq!(p.rain.wind_strength, 2.0);
        assert_eq!(p.lightning.frequency_floor, 3.0);
        assert!(p.lightning.enabled);
        assert_eq!(p.lightning.intensity, 0.0);
        assert_eq!(p.fog.density, 0.08);
        assert_eq!(p.camera.damping_factor, 0.05);
        assert_eq!(p.ground.wetness_roughness, 0.1);
        assert_eq!(p.scene.brightness, 0.3);
        assert!(p.scene.post_processing_enabled);
    }

    #[test]
    fn test_defaults_are_already_sane() {
        let mut p = StormParams::default();
        assert!(!p.sanitize(), "defaults should not need clamping");
    }

    #[test]
    fn test_sanitize_clamps_negative_fall_speed() {
        let mut p = StormParams::default();
        p.rain.fall_speed = -4.0;
        assert!(p.sanitize());
        assert_eq!(p.rain.fall_speed, *FALL_SPEED_RANGE.start());
    }

    #[test]
    fn test_sanitize_clamps_zero_particle_count() {
        let mut p = StormParams::default();
        p.rain.particle_count = 0;
        p.sanitize();
        assert_eq!(p.rain.particle_count, MIN_PARTICLE_COUNT);

        p.rain.particle_count = 10_000_000;
        p.sanitize();
        assert_eq!(p.rain.particle_count, MAX_PARTICLE_COUNT);
    }

    #[test]
    fn test_sanitize_replaces_nan_with_default() {
        let mut p = StormParams::default();
        p.fog.density = f32::NAN;
        p.camera.damping_factor = f32::NAN;
        p.lightning.intensity = f32::NAN;
        p.sanitize();
        assert_eq!(p.fog.density, DEFAULT_FOG_DENSITY);
        assert_eq!(p.camera.damping_factor, DEFAULT_DAMPING_FACTOR);
        assert_eq!(p.lightning.intensity, 0.0);
    }

    #[test]
    fn test_sanitize_keeps_damping_extremes() {
        let mut p = StormParams::default();
        p.camera.damping_factor = 1.0;
        assert!(!p.sanitize());
        p.camera.damping_factor = 0.01;
        assert!(!p.sanitize());
        p.camera.damping_factor = 0.0;
        p.sanitize();
        assert_eq!(p.camera.damping_factor, 0.01);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let mut p = StormParams::default();
        p.rain.wind_strength = 99.0;
        p.scene.brightness = -1.0;
        p.fog.color = [2.0, -1.0, 0.5];
        p.sanitize();
        let once = p.clone();
        assert!(!p.sanitize());
        assert_eq!(p, once);
        assert_eq!(p.fog.color, [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_runtime_fields_are_not_serialized() {
        let mut p = StormParams::default();
        p.lightning.intensity = 7.0;
        p.lightning.last_flash_time = 12.0;
        p.camera.offset = Vec2::new(1.0, 1.0);
        let json = serde_json::to_string(&p).expect("serialize");
        assert!(!json.contains("intensity\""), "got: {json}");
        assert!(!json.contains("last_flash_time"), "got: {json}");
        assert!(!json.contains("offset"), "got: {json}");

        let back: StormParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.lightning.intensity, 0.0);
        assert_eq!(back.camera.offset, Vec2::ZERO);
        assert_eq!(back.rain, p.rain);
    }
}
