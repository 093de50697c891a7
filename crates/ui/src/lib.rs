use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::StormSet;

pub mod storm_panel;
pub mod theme;

/// Panel systems. They write `StormParams`, so they run before the storm
/// reads it this frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StormPanelSet;

pub(crate) fn configure_panel_set(app: &mut App) {
    app.configure_sets(Update, StormPanelSet.before(StormSet::Input));
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        configure_panel_set(app);

        app.add_plugins(EguiPlugin)
            .init_resource::<storm_panel::StormPanelVisible>()
            .add_systems(Startup, theme::apply_storm_theme)
            .add_systems(
                Update,
                (storm_panel::toggle_storm_panel, storm_panel::storm_panel_ui)
                    .chain()
                    .in_set(StormPanelSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};
    use simulation::rain::RainFieldState;
    use simulation::{SimulationPlugin, StormParams};

    fn shrink_rain(mut params: ResMut<StormParams>) {
        params.rain.particle_count = 2_000;
    }

    #[test]
    fn test_panel_edits_reach_the_same_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
        configure_panel_set(&mut app);
        app.add_systems(Update, shrink_rain.in_set(StormPanelSet))
            .edit_schedule(Update, |schedule| {
                schedule.set_build_settings(ScheduleBuildSettings {
                    ambiguity_detection: LogLevel::Error,
                    ..default()
                });
            });

        app.update();

        // The rebuild in StormSet::Simulate already saw the panel's count.
        let rain = app.world().resource::<RainFieldState>();
        assert_eq!(rain.field().len(), 2_000);
        assert_eq!(rain.generation(), 1);
    }
}
