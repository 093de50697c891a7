use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

pub const SCREENSHOT_ENV_VAR: &str = "STORMROAD_SCREENSHOT";

/// Frames rendered before the capture, so rain and fog have settled.
const WARMUP_FRAMES: u32 = 180;
/// Frames to wait after the capture for the file to be written.
const SAVE_FRAMES: u32 = 20;

pub struct ScreenshotModePlugin {
    pub path: String,
}

impl Plugin for ScreenshotModePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ScreenshotShot {
            frame: 0,
            path: self.path.clone(),
        })
        .add_systems(Update, drive_screenshot);
    }
}

#[derive(Resource)]
struct ScreenshotShot {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut shot: ResMut<ScreenshotShot>,
    mut exit: EventWriter<AppExit>,
) {
    shot.frame += 1;

    if shot.frame == WARMUP_FRAMES {
        info!("Capturing screenshot to {}", shot.path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(shot.path.clone()));
    } else if shot.frame > WARMUP_FRAMES + SAVE_FRAMES {
        exit.send(AppExit::Success);
    }
}
