// Exploration Log - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Form heading ("Add New Planet" / "Edit Planet").
pub const FORM_HEADING: Color32 = Color32::from_rgb(216, 180, 254); // Purple 300

/// Log list heading.
pub const LOG_HEADING: Color32 = Color32::from_rgb(134, 239, 172); // Green 300

/// Planet name in the detail window.
pub const DETAIL_TITLE: Color32 = Color32::from_rgb(147, 197, 253); // Blue 300

/// Primary submit button fill.
pub const SUBMIT_BUTTON: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Secondary (cancel) button fill.
pub const CANCEL_BUTTON: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Edit button fill.
pub const EDIT_BUTTON: Color32 = Color32::from_rgb(234, 179, 8); // Yellow 500

/// Delete button fill.
pub const DELETE_BUTTON: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Button label colour on filled buttons.
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

/// Layout constants.
pub const FORM_PANEL_WIDTH: f32 = 340.0;
pub const DETAIL_WINDOW_WIDTH: f32 = 480.0;
pub const DETAIL_IMAGE_MAX_HEIGHT: f32 = 320.0;
pub const DESCRIPTION_ROWS: usize = 4;
pub const ENTRY_SPACING: f32 = 6.0;

/// Apply the configured theme and body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(font_size));
        style
            .text_styles
            .insert(egui::TextStyle::Button, egui::FontId::proportional(font_size));
    });
}

/// A filled button with white text.
pub fn filled_button(label: &str, fill: Color32) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(label).color(BUTTON_TEXT).strong()).fill(fill)
}
