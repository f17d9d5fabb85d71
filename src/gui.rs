// Exploration Log - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and the background image read.

use crate::app::image_loader::ImageLoader;
use crate::app::state::AppState;
use crate::ui;
use crate::ui::preview::ImagePreviews;

/// How often to repaint while an image read is in flight.
const IMAGE_POLL_INTERVAL_MS: u64 = 50;

/// The Exploration Log application.
pub struct ExplorationLogApp {
    pub state: AppState,
    pub image_loader: ImageLoader,
    previews: ImagePreviews,
}

impl ExplorationLogApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            image_loader: ImageLoader::new(),
            previews: ImagePreviews::new(),
        }
    }
}

impl eframe::App for ExplorationLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Background image read ----
        if let Some(path) = self.state.pending_image.take() {
            self.image_loader.start(path);
        }
        if let Some(progress) = self.image_loader.poll() {
            self.state.apply_image_result(progress);
        }
        if !self.image_loader.is_loading() {
            self.state.image_loading = false;
        }
        if self.state.image_loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(IMAGE_POLL_INTERVAL_MS));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.log.len();
                    ui.label(format!("{total} planet(s)"));
                    if self.state.debug_mode {
                        ui.separator();
                        ui.label(egui::RichText::new("DEBUG").weak());
                    }
                });
            });
        });

        // Form (left)
        egui::SidePanel::left("form_panel")
            .default_width(ui::theme::FORM_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("form_scroll")
                    .show(ui, |ui| {
                        ui::panels::form::render(ui, &mut self.state);
                    });
            });

        // Log list (centre)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_list::render(ui, &mut self.state);
        });

        // Windows
        ui::panels::detail::render(ctx, &mut self.state, &mut self.previews);
        ui::panels::about::render(ctx, &mut self.state);
    }
}
