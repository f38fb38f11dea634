//! Centralized theme constants for the hpath GUI.
//!
//! Colors, spacing, and canvas parameters live here so the visual
//! presentation can be tuned in one place.
//!
//! # Theme: "Neon Grid"
//!
//! Phosphor-CRT styling: the curve gradient runs over the full color wheel
//! at full saturation, panels sit on an inky midnight background, and
//! indigo strokes frame the controls.

use egui::{Color32, ecolor::Hsva};

// =============================================================================
// COLORS
// =============================================================================

/// Inky midnight background that lets the gradient pop.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0x06, 0x08, 0x14);

/// Panel/UI background, a hair brighter than the canvas.
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0x0b, 0x0f, 0x22);

/// Primary text color - crisp cool white.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe6, 0xed, 0xff);

/// Secondary/muted text color - desaturated periwinkle.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9f, 0xb4, 0xe5);

/// Body text color - softly cool white.
pub const TEXT_BODY: Color32 = Color32::from_rgb(0xcb, 0xd7, 0xff);

/// Dim text color - muted dusk blue.
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x69, 0x73, 0x92);

/// Heading color - neon magenta.
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0xff, 0x5a, 0xf1);

/// Link color - sharp cyan.
pub const TEXT_LINK: Color32 = Color32::from_rgb(0x55, 0xf0, 0xff);

/// Widget background color - deep indigo.
pub const WIDGET_BACKGROUND: Color32 = Color32::from_rgb(0x16, 0x14, 0x28);

/// Widget background when hovered - brighter neon wash.
pub const WIDGET_HOVERED: Color32 = Color32::from_rgb(0x23, 0x20, 0x38);

/// Widget background when active/pressed - saturated ultraviolet.
pub const WIDGET_ACTIVE: Color32 = Color32::from_rgb(0x2f, 0x28, 0x4e);

/// Selected/highlighted state - muted magenta fill.
pub const SELECTION: Color32 = Color32::from_rgb(0x25, 0x1e, 0x3a);

/// Border/separator color - indigo stroke.
pub const BORDER: Color32 = Color32::from_rgb(0x38, 0x35, 0x57);

/// Slider track/rail background color.
pub const SLIDER_RAIL: Color32 = Color32::from_rgb(0x2a, 0x27, 0x40);

/// Slider filled/active portion color.
pub const SLIDER_FILL: Color32 = Color32::from_rgb(0x29, 0xf0, 0xff);

/// Dimming overlay for modal backgrounds.
pub const MODAL_DIM_ALPHA: u8 = 180;

/// Shadow color alpha for the About dialog.
pub const DIALOG_SHADOW_ALPHA: u8 = 160;

// =============================================================================
// GRADIENT
// =============================================================================

/// Parameters of the hue gradient along the curve traversal.
pub mod gradient {
    /// Hue at the start of the path, in degrees.
    pub const HUE_START: f32 = 0.0;

    /// Hue at the end of the path, in degrees.
    pub const HUE_END: f32 = 360.0;

    /// Saturation of every segment color.
    pub const SATURATION: f32 = 1.0;

    /// Value (brightness) of every segment color.
    pub const VALUE: f32 = 1.0;
}

/// Map a position along the curve (in `(0, 1]`) to its gradient color.
#[inline]
pub fn gradient_color(t: f32) -> Color32 {
    let degrees = gradient::HUE_START + (gradient::HUE_END - gradient::HUE_START) * t;
    Hsva::new(
        (degrees / 360.0).rem_euclid(1.0),
        gradient::SATURATION,
        gradient::VALUE,
        1.0,
    )
    .into()
}

// =============================================================================
// FONTS & TEXT
// =============================================================================

/// Font sizes used throughout the application.
pub mod font_size {
    /// Title text in the menu bar.
    pub const TITLE: f32 = 18.0;

    /// Large heading text in the About dialog.
    pub const HEADING_LARGE: f32 = 28.0;

    /// Close button text.
    pub const CLOSE_BUTTON: f32 = 18.0;

    /// Standard label text.
    pub const LABEL: f32 = 14.0;

    /// Small info text.
    pub const INFO: f32 = 13.0;

    /// Version text.
    pub const VERSION: f32 = 12.0;
}

// =============================================================================
// SPACING & LAYOUT
// =============================================================================

/// Spacing values used throughout the UI.
pub mod spacing {
    /// Small vertical space.
    pub const SMALL: f32 = 4.0;

    /// Medium vertical space.
    pub const MEDIUM: f32 = 8.0;

    /// Large vertical space.
    pub const LARGE: f32 = 16.0;
}

/// Menu bar styling constants.
pub mod menu_bar {
    /// Vertical padding for the top menu bar.
    pub const PADDING_VERTICAL: f32 = 6.0;

    /// Horizontal padding for the top menu bar.
    pub const PADDING_HORIZONTAL: f32 = 12.0;

    /// Padding around the About button.
    pub const BUTTON_PADDING: f32 = 8.0;
}

/// Control bar (secondary toolbar) styling constants.
pub mod control_bar {
    /// Vertical padding for the control bar.
    pub const PADDING_VERTICAL: f32 = 4.0;

    /// Horizontal padding for the control bar.
    pub const PADDING_HORIZONTAL: f32 = 8.0;
}

/// Window and dialog dimensions.
pub mod window {
    /// Default window size.
    pub const DEFAULT_SIZE: [f32; 2] = [800.0, 600.0];

    /// About dialog size.
    pub const ABOUT_DIALOG_SIZE: (f32, f32) = (550.0, 450.0);

    /// About dialog content scroll area max height.
    pub const ABOUT_SCROLL_HEIGHT: f32 = 300.0;
}

/// Shadow parameters for UI elements.
pub mod shadow {
    /// Shadow offset (x, y).
    pub const OFFSET: [i8; 2] = [1, 2];

    /// Shadow blur radius.
    pub const BLUR: u8 = 6;

    /// Shadow spread.
    pub const SPREAD: u8 = 0;
}

// =============================================================================
// CANVAS
// =============================================================================

/// Curve canvas rendering parameters.
pub mod canvas {
    /// Margin inside the drawing rect.
    pub const MARGIN: f32 = 10.0;

    /// Drawing area as a fraction of available space.
    pub const SIZE_FRACTION: f32 = 0.85;

    /// Minimum drawing area size.
    pub const MIN_SIZE: f32 = 200.0;

    /// Line width for curve segments.
    pub const LINE_WIDTH: f32 = 2.5;
}

// =============================================================================
// EGUI VISUALS CONFIGURATION
// =============================================================================

/// Configure egui visuals with the Neon Grid theme.
pub fn configure_visuals(ctx: &egui::Context) {
    use egui::Visuals;

    let mut visuals = Visuals::dark();

    // Window and panel backgrounds
    visuals.window_fill = PANEL_BACKGROUND;
    visuals.panel_fill = PANEL_BACKGROUND;
    visuals.extreme_bg_color = CANVAS_BACKGROUND;
    visuals.faint_bg_color = WIDGET_BACKGROUND;

    // Override text color - use readable body text as default
    visuals.override_text_color = Some(TEXT_BODY);

    // Widget colors
    visuals.widgets.noninteractive.bg_fill = WIDGET_BACKGROUND;
    visuals.widgets.noninteractive.fg_stroke.color = TEXT_BODY;
    visuals.widgets.noninteractive.bg_stroke.color = BORDER;

    visuals.widgets.inactive.bg_fill = WIDGET_BACKGROUND;
    visuals.widgets.inactive.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.inactive.bg_stroke.color = BORDER;

    visuals.widgets.hovered.bg_fill = WIDGET_HOVERED;
    visuals.widgets.hovered.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.hovered.bg_stroke.color = TEXT_SECONDARY;

    visuals.widgets.active.bg_fill = WIDGET_ACTIVE;
    visuals.widgets.active.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.active.bg_stroke.color = TEXT_PRIMARY;

    visuals.widgets.open.bg_fill = WIDGET_ACTIVE;
    visuals.widgets.open.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.open.bg_stroke.color = TEXT_PRIMARY;

    // Selection and links
    visuals.selection.bg_fill = SELECTION;
    visuals.selection.stroke.color = TEXT_HEADING;
    visuals.hyperlink_color = TEXT_LINK;
    visuals.warn_fg_color = TEXT_HEADING;

    // Slider styling - show filled portion
    visuals.slider_trailing_fill = true;

    // Window styling - technical, minimal rounding
    visuals.window_corner_radius = egui::CornerRadius::same(2);
    visuals.menu_corner_radius = egui::CornerRadius::same(2);
    visuals.window_stroke.color = BORDER;

    ctx.set_visuals(visuals);

    // Tighter spacing for a more compact, technical feel
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.indent = 16.0;
    ctx.set_style(style);
}
