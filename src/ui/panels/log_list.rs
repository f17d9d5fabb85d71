// Exploration Log - ui/panels/log_list.rs
//
// The list of recorded planets (central panel). Each row opens the detail
// window on click and carries Edit and Delete buttons.
//
// Rows only record what was clicked; the action is applied after the list
// has been drawn so the log is never mutated while it is being iterated.

use crate::app::state::AppState;
use crate::core::model::EntryId;
use crate::ui::theme;
use crate::util::constants::LIST_DESCRIPTION_LINES;

/// A click on one of the list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Select(EntryId),
    Edit(EntryId),
    Delete(EntryId),
}

/// Apply a row action to the state.
pub fn apply_action(state: &mut AppState, action: ListAction) {
    match action {
        ListAction::Select(id) => {
            state.log.select(id);
        }
        ListAction::Edit(id) => state.begin_edit(id),
        ListAction::Delete(id) => state.delete(id),
    }
}

/// Description laid out to wrap at `wrap_width` and stop after
/// `LIST_DESCRIPTION_LINES` rows, ending in an ellipsis when cut.
pub fn clamped_description(
    text: &str,
    font_id: egui::FontId,
    color: egui::Color32,
    wrap_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::simple(text.to_owned(), font_id, color, wrap_width);
    job.wrap.max_rows = LIST_DESCRIPTION_LINES;
    job.wrap.break_anywhere = false;
    job.wrap.overflow_character = Some('\u{2026}');
    job
}

/// Render the planet list.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new("Exploration Log")
            .heading()
            .color(theme::LOG_HEADING),
    );
    ui.separator();

    if state.log.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No planets recorded in your log yet.").weak());
        });
        return;
    }

    let mut action = None;
    egui::ScrollArea::vertical()
        .id_salt("log_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for entry in state.log.entries() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(theme::filled_button("Delete", theme::DELETE_BUTTON))
                                .clicked()
                            {
                                action = Some(ListAction::Delete(entry.id));
                            }
                            if ui
                                .add(theme::filled_button("Edit", theme::EDIT_BUTTON))
                                .clicked()
                            {
                                action = Some(ListAction::Edit(entry.id));
                            }

                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                let body = ui
                                    .vertical(|ui| {
                                        ui.label(egui::RichText::new(&entry.name).strong());
                                        let job = clamped_description(
                                            &entry.description,
                                            egui::TextStyle::Body.resolve(ui.style()),
                                            ui.visuals().weak_text_color(),
                                            ui.available_width(),
                                        );
                                        let galley = ui.fonts(|f| f.layout_job(job));
                                        ui.label(galley);
                                    })
                                    .response
                                    .interact(egui::Sense::click())
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if body.clicked() {
                                    action = Some(ListAction::Select(entry.id));
                                }
                            });
                        });
                    });
                });
                ui.add_space(theme::ENTRY_SPACING);
            }
        });

    if let Some(action) = action {
        apply_action(state, action);
    }
}
