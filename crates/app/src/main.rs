use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::sim_rng::SimRng;
use simulation::storm_config::{load_config, StormConfig, CONFIG_ENV_VAR};

mod screenshot_mode;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stormroad".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // Config resources go in BEFORE SimulationPlugin, which keeps existing ones.
    let config = startup_config();
    app.insert_resource(config.params)
        .insert_resource(SimRng::from_seed_u64(config.seed))
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    // Screenshot mode: render a few seconds of storm, save one frame and exit
    if let Ok(path) = std::env::var(screenshot_mode::SCREENSHOT_ENV_VAR) {
        app.add_plugins(screenshot_mode::ScreenshotModePlugin { path });
    }

    app.run();
}

fn startup_config() -> StormConfig {
    let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
        return StormConfig::default();
    };
    match load_config(&path) {
        Ok(config) => {
            info!("Loaded storm config from {path}");
            config
        }
        Err(err) => {
            warn!("Ignoring storm config {path}: {err}");
            StormConfig::default()
        }
    }
}
