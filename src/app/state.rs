// Exploration Log - app/state.rs
//
// Application state management. Holds the log manager, UI flags, and the
// status bar message. Owned by the eframe::App implementation.
//
// Panels mutate this state; they never touch storage or threads directly.
// Requests that need the App's background machinery (the image read) are
// left here as `pending_*` fields and picked up once per frame.

use crate::app::image_loader::ImageLoadProgress;
use crate::app::log_manager::{LogManager, SubmitOutcome};
use crate::app::persistence::StoragePersister;
use crate::core::model::EntryId;
use crate::platform::storage::KeyValueStore;
use std::path::PathBuf;

/// Log manager persisting to whichever store was chosen at startup.
pub type StoredLog = LogManager<StoragePersister<Box<dyn KeyValueStore>>>;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The planet log, draft, and selection.
    pub log: StoredLog,

    /// Image file chosen in the form, waiting to be read.
    pub pending_image: Option<PathBuf>,

    /// Whether an image read is in flight.
    pub image_loading: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Bumped whenever the draft is replaced (submit, begin or cancel edit).
    draft_generation: u64,

    /// Draft generation the in-flight image read belongs to.
    image_request: Option<u64>,
}

impl AppState {
    /// Create initial state around an already-loaded log.
    pub fn new(log: StoredLog, debug_mode: bool) -> Self {
        let status_message = if log.is_empty() {
            "Ready. Record your first planet.".to_string()
        } else {
            format!("Ready. {} planet(s) in your log.", log.len())
        };
        Self {
            log,
            pending_image: None,
            image_loading: false,
            status_message,
            show_about: false,
            dark_mode: true,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            debug_mode,
            draft_generation: 0,
            image_request: None,
        }
    }

    /// Submit the form and report the result in the status bar.
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let name = self.log.draft().name.clone();
        let outcome = self.log.submit();
        self.status_message = match outcome {
            SubmitOutcome::Created(_) => format!("Registered '{name}'."),
            SubmitOutcome::Updated(_) => format!("Saved changes to '{name}'."),
            SubmitOutcome::Missing(_) => {
                "That planet was deleted while you were editing it.".to_string()
            }
            SubmitOutcome::Rejected(field) => format!("Please fill in the {}.", field.label()),
        };
        if !matches!(outcome, SubmitOutcome::Rejected(_)) {
            self.draft_generation += 1;
        }
        outcome
    }

    pub fn begin_edit(&mut self, id: EntryId) {
        if self.log.begin_edit(id) {
            self.draft_generation += 1;
            self.status_message = format!("Editing '{}'.", self.log.draft().name);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.log.cancel_edit();
        self.draft_generation += 1;
        self.status_message = "Edit cancelled.".to_string();
    }

    pub fn delete(&mut self, id: EntryId) {
        let name = self.log.get(id).map(|e| e.name.clone());
        if self.log.delete(id) {
            if let Some(name) = name {
                self.status_message = format!("Deleted '{name}'.");
            }
        }
    }

    /// Queue an image file for reading.
    pub fn request_image(&mut self, path: PathBuf) {
        self.pending_image = Some(path);
        self.image_request = Some(self.draft_generation);
        self.image_loading = true;
    }

    pub fn remove_image(&mut self) {
        self.log.set_image(None);
    }

    /// Apply a finished image read to the current draft.
    ///
    /// Failures are logged only; the draft keeps its previous image. A read
    /// that finishes after its draft was submitted or replaced is dropped.
    pub fn apply_image_result(&mut self, progress: ImageLoadProgress) {
        self.image_loading = false;
        if self.image_request.take() != Some(self.draft_generation) {
            tracing::debug!("Image read finished for a draft that is gone; discarded");
            return;
        }
        match progress {
            ImageLoadProgress::Loaded { path, image } => {
                tracing::info!(
                    path = %path.display(),
                    image = %image,
                    "Image attached to draft"
                );
                self.log.set_image(Some(image));
            }
            ImageLoadProgress::Failed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "Image not attached");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data_uri::ImageDataUri;
    use crate::platform::storage::MemoryStore;
    use crate::util::error::ImageError;

    fn state_with(raw: Option<&str>) -> AppState {
        let mut store = MemoryStore::new();
        if let Some(raw) = raw {
            store.insert_raw("planets", raw);
        }
        let store: Box<dyn KeyValueStore> = Box::new(store);
        AppState::new(LogManager::open(StoragePersister::new(store, "planets")), false)
    }

    #[test]
    fn test_initial_status_reflects_loaded_count() {
        assert!(state_with(None).status_message.contains("first planet"));
        let s = state_with(Some(
            r#"[{"id":1,"name":"Mars","description":"Red","image":""}]"#,
        ));
        assert!(s.status_message.contains("1 planet"));
    }

    #[test]
    fn test_submit_and_delete_update_status() {
        let mut s = state_with(None);
        s.log.set_name("Mars");
        s.log.set_description("Red planet");
        let SubmitOutcome::Created(id) = s.submit_draft() else {
            panic!("expected Created");
        };
        assert_eq!(s.status_message, "Registered 'Mars'.");

        s.delete(id);
        assert_eq!(s.status_message, "Deleted 'Mars'.");
        assert!(s.log.is_empty());
    }

    #[test]
    fn test_rejected_submit_names_missing_field() {
        let mut s = state_with(None);
        s.log.set_name("Mars");
        assert!(matches!(s.submit_draft(), SubmitOutcome::Rejected(_)));
        assert_eq!(s.status_message, "Please fill in the description.");
    }

    #[test]
    fn test_image_result_updates_draft() {
        let mut s = state_with(None);
        s.request_image(PathBuf::from("/tmp/io.png"));
        assert!(s.image_loading);
        assert!(s.pending_image.is_some());

        let image = ImageDataUri::from_parts("image/png", b"px");
        s.apply_image_result(ImageLoadProgress::Loaded {
            path: PathBuf::from("/tmp/io.png"),
            image: image.clone(),
        });
        assert!(!s.image_loading);
        assert_eq!(s.log.draft().image, Some(image));

        s.apply_image_result(ImageLoadProgress::Failed {
            path: PathBuf::from("/tmp/bad.png"),
            error: ImageError::UnrecognisedFormat,
        });
        assert!(s.log.draft().image.is_some(), "failed read keeps previous image");

        s.remove_image();
        assert_eq!(s.log.draft().image, None);
    }

    #[test]
    fn test_image_for_replaced_draft_is_dropped() {
        let mut s = state_with(Some(concat!(
            r#"[{"id":1,"name":"Mars","description":"Red","image":""},"#,
            r#"{"id":2,"name":"Venus","description":"Hot","image":""}]"#
        )));
        let image = ImageDataUri::from_parts("image/png", b"px");
        let loaded = |image: &ImageDataUri| ImageLoadProgress::Loaded {
            path: PathBuf::from("/tmp/mars.png"),
            image: image.clone(),
        };

        s.begin_edit(EntryId(1));
        s.request_image(PathBuf::from("/tmp/mars.png"));
        s.cancel_edit();
        s.begin_edit(EntryId(2));
        s.apply_image_result(loaded(&image));
        assert!(!s.image_loading);
        assert_eq!(s.log.draft().image, None);

        s.request_image(PathBuf::from("/tmp/mars.png"));
        assert!(matches!(s.submit_draft(), SubmitOutcome::Updated(_)));
        s.apply_image_result(loaded(&image));
        assert_eq!(s.log.draft().image, None);
        assert!(s.log.entries().iter().all(|e| e.image.is_none()));

        // A read for the current draft still lands.
        s.request_image(PathBuf::from("/tmp/mars.png"));
        s.apply_image_result(loaded(&image));
        assert_eq!(s.log.draft().image, Some(image));
    }
}
