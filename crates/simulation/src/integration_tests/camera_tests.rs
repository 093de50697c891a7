use bevy::prelude::*;

use crate::config::{CAMERA_BASE_Y, CAMERA_BASE_Z};
use crate::test_harness::TestStorm;

// ====================================================================
// Damped camera controller
// ====================================================================

#[test]
fn test_camera_starts_at_rest_position() {
    let mut storm = TestStorm::new();
    storm.frame(None);
    assert_eq!(
        storm.rig().current,
        Vec3::new(0.0, CAMERA_BASE_Y, CAMERA_BASE_Z)
    );
}

#[test]
fn test_pointer_right_pulls_camera_to_x_two() {
    let mut storm = TestStorm::new();
    storm.frames(200, Some(Vec2::new(1.0, 0.0)));
    let current = storm.rig().current;
    assert!((current.x - 2.0).abs() < 0.01, "x = {}", current.x);
    assert_eq!(storm.params().camera.offset, Vec2::new(2.0, 0.0));
}

#[test]
fn test_pointer_leaving_window_keeps_last_offset() {
    let mut storm = TestStorm::new();
    storm.frames(10, Some(Vec2::new(-1.0, 1.0)));
    let offset = storm.params().camera.offset;
    storm.frames(300, None);
    assert_eq!(storm.params().camera.offset, offset);
    let current = storm.rig().current;
    assert!((current.x + 2.0).abs() < 0.01, "x = {}", current.x);
    assert!((current.y - (CAMERA_BASE_Y + 0.5)).abs() < 0.01, "y = {}", current.y);
}

#[test]
fn test_full_damping_snaps_in_one_frame() {
    let mut storm = TestStorm::new();
    storm.params_mut().camera.damping_factor = 1.0;
    storm.frame(Some(Vec2::new(0.5, -1.0)));
    assert_eq!(
        storm.rig().current,
        Vec3::new(1.0, CAMERA_BASE_Y - 0.5, CAMERA_BASE_Z)
    );
}

#[test]
fn test_camera_motion_is_smooth() {
    let mut storm = TestStorm::new();
    let mut prev = storm.rig().current;
    for _ in 0..120 {
        storm.frame(Some(Vec2::new(1.0, 1.0)));
        let current = storm.rig().current;
        // At damping 0.05 no frame moves more than 5% of the ~2.06 unit gap.
        assert!(current.distance(prev) < 0.11, "jump of {}", current.distance(prev));
        prev = current;
    }
}
