//! The curve canvas: controls and gradient polyline rendering.

use egui::{self, epaint::Stroke};
use hilbertpath::GridPoint;

use super::widgets;
use crate::{AppState, theme, view::CurveView};

/// Render the curve pane, including the control bar and the canvas.
pub fn show_curve_pane(ui: &mut egui::Ui, app_state: &mut AppState, view: &mut CurveView) {
    // Secondary control bar with lighter visual weight
    egui::Frame::new()
        .inner_margin(egui::Margin {
            left: theme::control_bar::PADDING_HORIZONTAL as i8,
            right: theme::control_bar::PADDING_HORIZONTAL as i8,
            top: theme::control_bar::PADDING_VERTICAL as i8,
            bottom: theme::control_bar::PADDING_VERTICAL as i8,
        })
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Order:")
                        .size(theme::font_size::INFO)
                        .color(theme::TEXT_DIM),
                );
                widgets::order_slider(ui, &mut view.order);

                ui.separator();

                widgets::grid_info_label(ui, view.order);
            });
        });

    ui.separator();

    draw_curve_canvas(ui, app_state, view);
}

/// Render the drawing canvas with the gradient polyline.
fn draw_curve_canvas(ui: &mut egui::Ui, app_state: &mut AppState, view: &mut CurveView) {
    let bg = theme::CANVAS_BACKGROUND;
    let available_rect = ui.available_rect_before_wrap();
    let drawing_size = (available_rect.width().min(available_rect.height())
        * theme::canvas::SIZE_FRACTION)
        .max(theme::canvas::MIN_SIZE);
    let drawing_rect =
        egui::Rect::from_center_size(available_rect.center(), egui::Vec2::splat(drawing_size));
    let painter = ui.painter_at(available_rect);
    painter.rect_filled(available_rect, 0.0, bg);

    if let Some(path) = view.ensure_path() {
        let painter = ui.painter_at(drawing_rect);
        painter.rect_filled(drawing_rect, 5.0, bg);

        let margin = theme::canvas::MARGIN;
        let inner_size = drawing_size - margin * 2.0;
        let scale = inner_size / (path.side() - 1) as f32;

        build_screen_points(path, drawing_rect, scale, margin, &mut app_state.screen_cache);
        let screen_points = &app_state.screen_cache;

        let total = path.len();
        for (offset, pair) in screen_points.windows(2).enumerate() {
            let color = theme::gradient_color((offset + 1) as f32 / total as f32);
            painter.line_segment([pair[0], pair[1]], Stroke::new(theme::canvas::LINE_WIDTH, color));
        }
    }

    ui.allocate_rect(drawing_rect, egui::Sense::hover());
}

/// Convert grid points to screen positions within the drawing rect.
fn build_screen_points(
    curve_points: &[GridPoint],
    drawing_rect: egui::Rect,
    scale: f32,
    margin: f32,
    out: &mut Vec<egui::Pos2>,
) {
    out.clear();
    out.reserve(curve_points.len());
    for point in curve_points {
        out.push(egui::Pos2 {
            x: drawing_rect.min.x + margin + point.x as f32 * scale,
            y: drawing_rect.min.y + margin + point.y as f32 * scale,
        });
    }
}
