use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use simulation::sim_clock::SimClock;

const SCREENSHOT_DIR: &str = "screenshots";

pub struct ScreenshotPlugin;

impl Plugin for ScreenshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_screenshot_key);
    }
}

pub fn screenshot_path(frame: u64) -> String {
    format!("{SCREENSHOT_DIR}/storm_{frame:06}.png")
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_screenshot_key(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<SimClock>,
) {
    if !keyboard.just_pressed(KeyCode::F12) {
        return;
    }
    if let Err(err) = std::fs::create_dir_all(SCREENSHOT_DIR) {
        warn!("Cannot create {SCREENSHOT_DIR}/: {err}");
        return;
    }
    let path = screenshot_path(clock.frame);
    info!("Saving screenshot to {path}");
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
}

#[cfg(target_arch = "wasm32")]
fn handle_screenshot_key() {}
