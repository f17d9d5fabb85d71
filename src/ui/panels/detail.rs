// Exploration Log - ui/panels/detail.rs
//
// Detail modal for the selected planet: name, image, full description.
// The modal blocks the list underneath; Close, Escape or a click on the
// backdrop clears the selection.

use crate::app::state::AppState;
use crate::ui::preview::ImagePreviews;
use crate::ui::theme;

/// Render the detail modal (if a planet is selected).
pub fn render(ctx: &egui::Context, state: &mut AppState, previews: &mut ImagePreviews) {
    let Some(entry) = state.log.selected() else {
        return;
    };

    let mut close_clicked = false;
    let modal = egui::Modal::new(egui::Id::new("planet_detail")).show(ctx, |ui| {
        ui.set_width(theme::DETAIL_WINDOW_WIDTH);
        ui.label(
            egui::RichText::new(&entry.name)
                .heading()
                .color(theme::DETAIL_TITLE),
        );
        ui.separator();

        if let Some(image) = &entry.image {
            if let Some(texture) = previews.texture(ctx, image) {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .max_width(theme::DETAIL_WINDOW_WIDTH)
                            .max_height(theme::DETAIL_IMAGE_MAX_HEIGHT)
                            .maintain_aspect_ratio(true),
                    );
                });
                ui.add_space(8.0);
            }
        }

        egui::ScrollArea::vertical()
            .id_salt("detail_description")
            .max_height(240.0)
            .show(ui, |ui| {
                ui.label(&entry.description);
            });

        ui.add_space(8.0);
        ui.separator();
        close_clicked = ui.button("Close").clicked();
    });

    if close_clicked || modal.should_close() {
        state.log.deselect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::log_manager::LogManager;
    use crate::app::persistence::StoragePersister;
    use crate::core::model::EntryId;
    use crate::platform::storage::{KeyValueStore, MemoryStore};

    fn state() -> AppState {
        let mut store = MemoryStore::new();
        store.insert_raw(
            "planets",
            r#"[{"id":1,"name":"Mars","description":"Red","image":""}]"#,
        );
        let store: Box<dyn KeyValueStore> = Box::new(store);
        AppState::new(LogManager::open(StoragePersister::new(store, "planets")), false)
    }

    fn escape_pressed() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_modal_keeps_selection_until_escape() {
        let ctx = egui::Context::default();
        let mut s = state();
        let mut previews = ImagePreviews::new();
        assert!(s.log.select(EntryId(1)));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render(ctx, &mut s, &mut previews);
        });
        assert_eq!(s.log.selected_id(), Some(EntryId(1)));

        let _ = ctx.run(escape_pressed(), |ctx| {
            render(ctx, &mut s, &mut previews);
        });
        assert_eq!(s.log.selected_id(), None);
    }
}
