//! Storm Controls panel.
//!
//! Exposes every tunable in `StormParams` plus a read-only status line.
//! F1 shows or hides the window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{
    BRIGHTNESS_RANGE, DAMPING_FACTOR_UI_RANGE, FALL_SPEED_RANGE, FOG_DENSITY_RANGE,
    FOG_HEIGHT_SCALE_RANGE, FREQUENCY_FLOOR_RANGE, MAX_PARTICLE_COUNT, MIN_PARTICLE_COUNT,
    WETNESS_ROUGHNESS_RANGE, WIND_STRENGTH_RANGE,
};
use simulation::lightning::LightningPreset;
use simulation::rain::RainFieldState;
use simulation::StormParams;

// =============================================================================
// Resources
// =============================================================================

/// The frequency floor is the shortest allowed wait between strikes.
pub const FREQUENCY_FLOOR_LABEL: &str = "min gap (s)";

#[derive(Resource)]
pub struct StormPanelVisible(pub bool);

impl Default for StormPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn toggle_storm_panel(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<StormPanelVisible>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

/// One-line status shown under the heading.
pub fn status_line(params: &StormParams, rain_generation: u64) -> String {
    format!(
        "flash {:.2} | last strike {:.1}s | rain gen {}",
        params.lightning.intensity, params.lightning.last_flash_time, rain_generation
    )
}

pub fn storm_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<StormPanelVisible>,
    mut params: ResMut<StormParams>,
    rain: Res<RainFieldState>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Storm Controls")
        .open(&mut open)
        .resizable(false)
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(status_line(&params, rain.generation()));
            if let Some(requested) = rain.failed_request() {
                ui.colored_label(
                    egui::Color32::from_rgb(230, 120, 90),
                    format!("Could not allocate {requested} drops"),
                );
            }

            ui.separator();

            // --- Rain ---
            ui.collapsing("Rain", |ui| {
                ui.checkbox(&mut params.rain.enabled, "Enabled");
                ui.add(
                    egui::Slider::new(&mut params.rain.fall_speed, FALL_SPEED_RANGE)
                        .text("fall speed"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.rain.particle_count,
                        MIN_PARTICLE_COUNT..=MAX_PARTICLE_COUNT,
                    )
                    .step_by(1_000.0)
                    .text("drops"),
                );
                ui.add(
                    egui::Slider::new(&mut params.rain.wind_strength, WIND_STRENGTH_RANGE)
                        .text("wind"),
                );
            });

            // --- Lightning ---
            ui.collapsing("Lightning", |ui| {
                ui.checkbox(&mut params.lightning.enabled, "Enabled");
                ui.add(
                    egui::Slider::new(
                        &mut params.lightning.frequency_floor,
                        FREQUENCY_FLOOR_RANGE,
                    )
                    .text(FREQUENCY_FLOOR_LABEL),
                );
                ui.horizontal(|ui| {
                    for preset in LightningPreset::ALL {
                        if ui
                            .selectable_label(params.lightning.preset == preset, preset.name())
                            .clicked()
                        {
                            params.lightning.preset = preset;
                        }
                    }
                });
            });

            // --- Atmosphere ---
            ui.collapsing("Atmosphere", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.fog.density, FOG_DENSITY_RANGE)
                        .text("fog density"),
                );
                ui.add(
                    egui::Slider::new(&mut params.fog.height_scale, FOG_HEIGHT_SCALE_RANGE)
                        .text("fog height"),
                );
                ui.horizontal(|ui| {
                    ui.label("Fog color:");
                    ui.color_edit_button_rgb(&mut params.fog.color);
                });
            });

            // --- Camera ---
            ui.collapsing("Camera", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.camera.damping_factor,
                        DAMPING_FACTOR_UI_RANGE,
                    )
                    .text("damping"),
                );
            });

            // --- Ground ---
            ui.collapsing("Ground", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.ground.wetness_roughness,
                        WETNESS_ROUGHNESS_RANGE,
                    )
                    .text("wet roughness"),
                );
            });

            // --- Scene ---
            ui.collapsing("Scene", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.scene.brightness, BRIGHTNESS_RANGE)
                        .text("brightness"),
                );
                ui.checkbox(&mut params.scene.post_processing_enabled, "Bloom");
            });
        });

    if !open {
        visible.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_reports_flash_state() {
        let mut params = StormParams::default();
        params.lightning.intensity = 3.25;
        params.lightning.last_flash_time = 12.0;
        assert_eq!(
            status_line(&params, 4),
            "flash 3.25 | last strike 12.0s | rain gen 4"
        );
    }

    #[test]
    fn test_frequency_floor_labelled_as_minimum() {
        assert!(FREQUENCY_FLOOR_LABEL.starts_with("min"));
    }

    #[test]
    fn test_panel_visible_by_default() {
        assert!(StormPanelVisible::default().0);
    }

    #[test]
    fn test_f1_toggles_panel() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<StormPanelVisible>()
            .add_systems(Update, toggle_storm_panel);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::F1);
        app.update();
        assert!(!app.world().resource::<StormPanelVisible>().0);

        // Held key does not toggle again.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert!(!app.world().resource::<StormPanelVisible>().0);

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::F1);
        keys.clear();
        keys.press(KeyCode::F1);
        app.update();
        assert!(app.world().resource::<StormPanelVisible>().0);
    }
}
