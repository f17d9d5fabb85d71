// Exploration Log - ui/panels/form.rs
//
// Create/edit form (left side panel). Title, buttons and the cancel button
// follow edit mode; submit stays disabled until both required fields are
// filled in.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::IMAGE_EXTENSIONS;

/// Render the planet form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = state.log.is_editing();

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(if editing { "Edit Planet" } else { "Add New Planet" })
            .heading()
            .color(theme::FORM_HEADING),
    );
    ui.separator();

    ui.label("Planet name");
    ui.add(egui::TextEdit::singleline(state.log.name_mut()).desired_width(f32::INFINITY));
    ui.add_space(4.0);

    ui.label("Description");
    ui.add(
        egui::TextEdit::multiline(state.log.description_mut())
            .desired_rows(theme::DESCRIPTION_ROWS)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    ui.label("Image (optional)");
    ui.horizontal(|ui| {
        if ui.button("Choose image\u{2026}").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
            {
                state.request_image(path);
            }
        }
        if state.image_loading {
            ui.spinner();
            ui.label("Reading image\u{2026}");
        }
    });
    if let Some(image) = &state.log.draft().image {
        let mut remove = false;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(image.to_string()).weak());
            remove = ui.small_button("Remove image").clicked();
        });
        if remove {
            state.remove_image();
        }
    }

    ui.add_space(8.0);
    let submit_label = if editing { "Save Changes" } else { "Register Planet" };
    let can_submit = state.log.draft().is_submittable();
    let submit = ui
        .add_enabled(
            can_submit,
            theme::filled_button(submit_label, theme::SUBMIT_BUTTON)
                .min_size(egui::vec2(ui.available_width(), 32.0)),
        )
        .on_disabled_hover_text("Name and description are required.");
    if submit.clicked() {
        state.submit_draft();
    }

    if editing {
        ui.add_space(4.0);
        if ui
            .add(
                theme::filled_button("Cancel Edit", theme::CANCEL_BUTTON)
                    .min_size(egui::vec2(ui.available_width(), 32.0)),
            )
            .clicked()
        {
            state.cancel_edit();
        }
    }
}
