//! Reusable GUI widgets.

use egui::{self, Response, Slider};

use crate::{theme, view};

/// Add a slider with themed rail and fill colors for better visibility.
pub fn themed_slider(ui: &mut egui::Ui, slider: Slider<'_>) -> Response {
    // Override widget visuals for the slider
    let old_noninteractive_bg = ui.visuals().widgets.noninteractive.bg_fill;
    let old_inactive_bg = ui.visuals().widgets.inactive.bg_fill;
    let old_inactive_fg = ui.visuals().widgets.inactive.fg_stroke.color;

    ui.visuals_mut().widgets.noninteractive.bg_fill = theme::SLIDER_RAIL;
    ui.visuals_mut().widgets.inactive.bg_fill = theme::SLIDER_RAIL;
    ui.visuals_mut().widgets.inactive.fg_stroke.color = theme::SLIDER_FILL;

    let response = ui.add(slider);

    // Restore original visuals
    ui.visuals_mut().widgets.noninteractive.bg_fill = old_noninteractive_bg;
    ui.visuals_mut().widgets.inactive.bg_fill = old_inactive_bg;
    ui.visuals_mut().widgets.inactive.fg_stroke.color = old_inactive_fg;

    response
}

/// Integer slider selecting the curve order.
///
/// Dragging it regenerates the path on the next frame.
pub fn order_slider(ui: &mut egui::Ui, order: &mut u32) -> Response {
    themed_slider(
        ui,
        Slider::new(order, view::MIN_ORDER..=view::MAX_ORDER).step_by(1.0),
    )
}

/// Dim informational label describing the grid for an order.
pub fn grid_info_label(ui: &mut egui::Ui, order: u32) {
    let side = 1u32 << order;
    ui.label(
        egui::RichText::new(format!("{side}×{side} · {} points", side * side))
            .size(theme::font_size::INFO)
            .color(theme::TEXT_DIM),
    );
}
