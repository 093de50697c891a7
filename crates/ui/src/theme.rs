use bevy_egui::{egui, EguiContexts};

/// Slate-blue panels that sit over the dark storm without glaring.
pub fn apply_storm_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(22, 26, 34, 235);
    let inactive = egui::Color32::from_rgb(44, 52, 66);
    let hover = egui::Color32::from_rgb(62, 76, 98);
    let active = egui::Color32::from_rgb(150, 180, 230);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.selection.bg_fill = active.linear_multiply(0.6);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
