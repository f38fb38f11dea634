//! GUI application for exploring the Hilbert curve using egui/eframe.

use anyhow::Result;

/// Canonical application name used across the GUI.
pub const APP_NAME: &str = "hilbertpath";

/// Primary repository URL for the application.
pub const APP_REPO_URL: &str = "https://github.com/cortesi/hilbertpath";

/// About dialog contents and helpers.
pub mod about;
/// Curve canvas and controls.
pub mod canvas;
/// Centralized theme constants (colors, spacing, canvas parameters).
pub mod theme;
/// Selection state and cached path for the canvas.
pub mod view;
/// Reusable GUI widgets.
pub mod widgets;

pub use view::CurveView;

/// Mutable application state used by the GUI.
#[derive(Default)]
pub struct AppState {
    /// Whether the About dialog is currently open.
    pub about_open: bool,
    /// Reusable buffer of screen-space points for the canvas.
    pub screen_cache: Vec<egui::Pos2>,
}

/// Root eframe application.
pub struct HilbertApp {
    /// Selection and cached path state.
    view: CurveView,
    /// Mutable app state.
    app_state: AppState,
    /// CommonMark cache for the About dialog.
    commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl HilbertApp {
    /// Construct a new app instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::configure_visuals(&cc.egui_ctx);

        Self {
            view: CurveView::default(),
            app_state: AppState::default(),
            commonmark_cache: Default::default(),
        }
    }

    /// Render the top menu bar with title and About button.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar")
            .frame(egui::Frame::new().inner_margin(egui::Margin {
                left: theme::menu_bar::PADDING_HORIZONTAL as i8,
                right: theme::menu_bar::PADDING_HORIZONTAL as i8,
                top: theme::menu_bar::PADDING_VERTICAL as i8,
                bottom: theme::menu_bar::PADDING_VERTICAL as i8,
            }))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // Title on the far left that links to the repository
                    if ui
                        .link(
                            egui::RichText::new(APP_NAME)
                                .size(theme::font_size::TITLE)
                                .strong()
                                .color(theme::TEXT_HEADING),
                        )
                        .clicked()
                        && let Err(e) = webbrowser::open(APP_REPO_URL)
                    {
                        eprintln!("Failed to open browser: {e}");
                    }

                    // Right-aligned About button with padding
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(theme::menu_bar::BUTTON_PADDING);
                        if ui.button("About").clicked() {
                            self.app_state.about_open = !self.app_state.about_open;
                        }
                    });
                });
            });
    }
}

impl eframe::App for HilbertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_menu_bar(ctx);

        // Show About dialog if open
        if self.app_state.about_open {
            about::show_about_dialog(
                ctx,
                &mut self.app_state.about_open,
                &mut self.commonmark_cache,
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show_curve_pane(ui, &mut self.app_state, &mut self.view);
        });
    }
}

/// Launch the native GUI application.
pub fn gui() -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::window::DEFAULT_SIZE)
            .with_title(format!("{APP_NAME} gui")),
        ..Default::default()
    };

    eframe::run_native(
        &format!("{APP_NAME} gui"),
        native_options,
        Box::new(|cc| Ok(Box::new(HilbertApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
