//! CPU mirror of the rain vertex shader's motion law.
//!
//! The GPU evaluates the same functions per vertex every frame; this copy
//! exists for tests, benches and any host-side query (e.g. "is there a drop
//! near the camera"). Keep it in step with `rain.wgsl` in the rendering crate.

use std::f32::consts::TAU;

use bevy::prelude::*;

use super::field::DropRecord;
use crate::config::{FALL_DISTANCE, RAIN_Y_MIN};

/// Horizontal lean per unit of wind across one fall loop.
pub const WIND_LEAN: f32 = 1.5;
/// Amplitude of the per-drop sway per unit of wind.
pub const WIND_SWAY: f32 = 0.3;
/// Camera distance at which drops start fading out.
pub const FADE_START: f32 = 30.0;
/// Camera distance at which drops are fully transparent.
pub const FADE_END: f32 = 70.0;

/// `x mod m` into `[0, m)`, robust against the rounding case where
/// `rem_euclid` returns `m` itself.
#[inline]
fn wrap_unit(x: f32, m: f32) -> f32 {
    let r = x.rem_euclid(m);
    if r >= m {
        0.0
    } else {
        r
    }
}

/// Distance fallen within the current loop, in `[0, FALL_DISTANCE)`.
#[inline]
pub fn fall_offset(drop: &DropRecord, time: f32, fall_speed: f32) -> f32 {
    wrap_unit(time * fall_speed * drop.speed_factor + drop.phase, FALL_DISTANCE)
}

/// Wrap a height into the rain volume `[RAIN_Y_MIN, RAIN_Y_MAX)`.
#[inline]
pub fn wrap_height(y: f32) -> f32 {
    RAIN_Y_MIN + wrap_unit(y - RAIN_Y_MIN, FALL_DISTANCE)
}

/// World position of `drop` at `time`.
pub fn drop_position(drop: &DropRecord, time: f32, fall_speed: f32, wind_strength: f32) -> Vec3 {
    let fall = fall_offset(drop, time, fall_speed);
    let cycle = fall / FALL_DISTANCE;
    let angle = TAU * cycle + drop.phase;
    Vec3::new(
        drop.origin.x + wind_strength * (WIND_LEAN * cycle + WIND_SWAY * angle.sin()),
        wrap_height(drop.origin.y - fall),
        drop.origin.z + wind_strength * WIND_SWAY * 0.5 * angle.cos(),
    )
}

/// Seconds after which `drop` is back where it started.
pub fn loop_period(drop: &DropRecord, fall_speed: f32) -> f32 {
    FALL_DISTANCE / (fall_speed * drop.speed_factor)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Opacity of a drop at `position` seen from `camera`.
pub fn drop_alpha(position: Vec3, camera: Vec3) -> f32 {
    1.0 - smoothstep(FADE_START, FADE_END, position.distance(camera))
}
