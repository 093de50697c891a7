//! Damped camera controller.
//!
//! The pointer (normalized to `[-1, 1]`, y up) sets a target offset; each
//! frame the rig position moves a fixed fraction of the way toward
//! `(offset.x, base_y + offset.y * 0.5, base_z)`:
//!
//!   `current += (target - current) * damping_factor`
//!
//! The step is per frame, not per second, so the response speed follows the
//! frame rate. A damping factor of 1.0 snaps in a single step.
//!
//! The rendering crate copies `CameraRig::current` into the camera transform
//! and aims it at the world origin.

use bevy::prelude::*;

use crate::config::{CAMERA_BASE_Y, CAMERA_BASE_Z, POINTER_SCALE_X, POINTER_SCALE_Y};
use crate::storm_params::StormParams;

/// Latest pointer position in normalized device coordinates, `None` when the
/// pointer is outside the window. Written by the host's input system.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput(pub Option<Vec2>);

/// Smoothed camera position.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub current: Vec3,
    pub base_y: f32,
    pub base_z: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            current: Vec3::new(0.0, CAMERA_BASE_Y, CAMERA_BASE_Z),
            base_y: CAMERA_BASE_Y,
            base_z: CAMERA_BASE_Z,
        }
    }
}

impl CameraRig {
    /// Position the rig is pulled toward for a given pointer offset.
    pub fn target(&self, offset: Vec2) -> Vec3 {
        Vec3::new(offset.x, self.base_y + offset.y * 0.5, self.base_z)
    }
}

/// Map a normalized pointer position to a camera offset.
#[inline]
pub fn pointer_offset(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * POINTER_SCALE_X, pointer.y * POINTER_SCALE_Y)
}

/// Move the rig one damped step toward the target for `offset`.
pub fn step_rig(rig: &mut CameraRig, offset: Vec2, damping: f32) {
    let target = rig.target(offset);
    rig.current += (target - rig.current) * damping;
}

/// System: fold the latest pointer position into the stored offset.
///
/// A pointer outside the window leaves the last offset in place.
pub fn read_pointer_offset(pointer: Res<PointerInput>, mut params: ResMut<StormParams>) {
    let Some(pointer) = pointer.0 else {
        return;
    };
    let offset = pointer_offset(pointer);
    if params.camera.offset != offset {
        params.camera.offset = offset;
    }
}

/// System: advance the rig by one damped step.
pub fn update_camera_rig(params: Res<StormParams>, mut rig: ResMut<CameraRig>) {
    let offset = params.camera.offset;
    let damping = params.camera.damping_factor;
    if rig.current == rig.target(offset) {
        return;
    }
    step_rig(&mut rig, offset, damping);
}
