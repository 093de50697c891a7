//! Pointer input for the camera controller.
//!
//! Converts the primary window cursor into the normalized pointer the camera
//! rig expects: x and y in [-1, 1], y pointing up, (0, 0) at the window centre.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use simulation::camera_rig::PointerInput;

/// Map a cursor position in logical pixels (origin top-left, y down) to the
/// normalized pointer. Returns `None` for a degenerate window.
pub fn normalize_cursor(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    let x = cursor.x / window_size.x * 2.0 - 1.0;
    let y = -(cursor.y / window_size.y * 2.0 - 1.0);
    Some(Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)))
}

/// True while the cursor is over a control panel or egui owns a drag.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// System: publish this frame's pointer. `None` (cursor outside the window
/// or over the UI) leaves the camera offset where it was.
pub fn update_pointer_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut pointer: ResMut<PointerInput>,
) {
    let next = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        windows.get_single().ok().and_then(|window| {
            let cursor = window.cursor_position()?;
            normalize_cursor(cursor, window.size())
        })
    };
    if pointer.0 != next {
        pointer.0 = next;
    }
}
