// Exploration Log - app/log_manager.rs
//
// The log state machine: the ordered entry list, the form draft, and the
// single detail selection. Every mutation of the list is followed by one
// call to the commit hook; reads and draft edits never commit.
//
// Invariants held here:
//   - entry ids are unique (enforced on construction, preserved by the
//     monotonic id generator);
//   - `draft.id` is `Some` exactly while an edit is in progress;
//   - at most one entry is selected, and only an entry that exists.

use crate::app::persistence::{CommitHook, StoragePersister};
use crate::core::codec;
use crate::core::data_uri::ImageDataUri;
use crate::core::ids::IdGenerator;
use crate::core::model::{Draft, Entry, EntryId, MissingField};
use crate::platform::storage::KeyValueStore;
use std::collections::HashSet;

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was appended.
    Created(EntryId),
    /// The edited entry was replaced in place.
    Updated(EntryId),
    /// The edited entry no longer exists; the log is unchanged.
    Missing(EntryId),
    /// A required field is empty; nothing changed, the draft is kept.
    Rejected(MissingField),
}

/// Owns the log and mediates every change to it.
#[derive(Debug)]
pub struct LogManager<H> {
    entries: Vec<Entry>,
    draft: Draft,
    selected: Option<EntryId>,
    ids: IdGenerator,
    hook: H,
}

impl<S: KeyValueStore> LogManager<StoragePersister<S>> {
    /// Load the stored log (empty on any failure) and manage it.
    pub fn open(persister: StoragePersister<S>) -> Self {
        let entries = persister.load();
        Self::new(entries, persister)
    }
}

impl<H: CommitHook> LogManager<H> {
    /// Manage `entries`, committing through `hook` from now on.
    ///
    /// Duplicate ids keep their first occurrence. Construction does not
    /// commit.
    pub fn new(entries: Vec<Entry>, hook: H) -> Self {
        let (entries, dropped) = codec::dedupe_ids(entries);
        if !dropped.is_empty() {
            tracing::warn!(
                dropped = dropped.len(),
                ids = ?dropped,
                "Duplicate entry ids in log; keeping first occurrences"
            );
        }
        let ids = IdGenerator::seeded(entries.iter().map(|e| e.id).max());
        Self {
            entries,
            draft: Draft::default(),
            selected: None,
            ids,
            hook,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    // -------------------------------------------------------------------------
    // Draft editing
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Mutable access to the name field for in-place text editing.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.draft.name
    }

    /// Mutable access to the description field for in-place text editing.
    pub fn description_mut(&mut self) -> &mut String {
        &mut self.draft.description
    }

    pub fn set_image(&mut self, image: Option<ImageDataUri>) {
        self.draft.image = image;
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Submit the draft: update the edited entry or append a new one.
    ///
    /// On anything but `Rejected` the draft is reset and edit mode ends.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(missing) = self.draft.missing_field() {
            return SubmitOutcome::Rejected(missing);
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match draft.id {
            Some(id) => match self.entries.iter_mut().find(|e| e.id == id) {
                Some(slot) => {
                    *slot = draft.to_entry(id);
                    SubmitOutcome::Updated(id)
                }
                None => {
                    tracing::warn!(id = %id, "Edited entry no longer exists; nothing saved");
                    SubmitOutcome::Missing(id)
                }
            },
            None => {
                let id = match self.ids.next() {
                    Some(id) => id,
                    None => self.lowest_free_id(),
                };
                self.entries.push(draft.to_entry(id));
                SubmitOutcome::Created(id)
            }
        };

        match outcome {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => {
                tracing::info!(id = %id, entries = self.entries.len(), "Entry saved");
                self.commit();
            }
            _ => {}
        }
        outcome
    }

    /// Load `id` into the draft for editing and close the detail view.
    ///
    /// Returns false (and changes nothing) if the entry does not exist.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.get(id) else {
            return false;
        };
        self.draft = Draft::from_entry(entry);
        self.selected = None;
        tracing::debug!(id = %id, "Editing entry");
        true
    }

    /// Leave edit mode and clear the draft; the log is untouched.
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
    }

    /// Remove the entry with `id`. Unknown ids are a no-op.
    ///
    /// Returns true if an entry was removed.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            tracing::debug!(id = %id, "Delete of unknown entry ignored");
            return false;
        };
        self.entries.remove(pos);
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::info!(id = %id, entries = self.entries.len(), "Entry deleted");
        self.commit();
        true
    }

    /// Show `id` in the detail view, replacing any previous selection.
    ///
    /// Returns false (and keeps the current selection) if it does not exist.
    pub fn select(&mut self, id: EntryId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Smallest id no entry uses. Only needed once an entry holds `u64::MAX`.
    fn lowest_free_id(&self) -> EntryId {
        let used: HashSet<u64> = self.entries.iter().map(|e| e.id.0).collect();
        let id = (1..=u64::MAX).find(|n| !used.contains(n)).unwrap_or(0);
        tracing::warn!(id, "Timestamp ids exhausted; reusing lowest free id");
        EntryId(id)
    }

    fn commit(&mut self) {
        self.hook.on_commit(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    /// Records every committed snapshot.
    #[derive(Debug, Default)]
    struct RecordingHook {
        commits: Vec<Vec<Entry>>,
    }

    impl CommitHook for RecordingHook {
        fn on_commit(&mut self, entries: &[Entry]) {
            self.commits.push(entries.to_vec());
        }
    }

    fn entry(id: u64, name: &str) -> Entry {
        Entry {
            id: EntryId(id),
            name: name.to_string(),
            description: format!("{name} description"),
            image: None,
        }
    }

    fn manager(entries: Vec<Entry>) -> LogManager<RecordingHook> {
        LogManager::new(entries, RecordingHook::default())
    }

    fn fill<H: CommitHook>(m: &mut LogManager<H>, name: &str, description: &str) {
        m.set_name(name);
        m.set_description(description);
    }

    #[test]
    fn test_create_appends_one_entry_and_resets_draft() {
        let mut m = manager(vec![entry(1, "Venus")]);
        fill(&mut m, "Mars", "Red planet");

        let outcome = m.submit();

        let SubmitOutcome::Created(id) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert_eq!(m.len(), 2);
        assert_eq!(m.entries()[1].id, id);
        assert_eq!(m.entries()[1].name, "Mars");
        assert_eq!(m.entries()[1].image, None);
        assert_ne!(id, EntryId(1));
        assert_eq!(m.draft(), &Draft::default());
        assert_eq!(m.hook().commits.len(), 1);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut m = manager(vec![entry(1, "Mars"), entry(2, "Venus")]);
        assert!(m.begin_edit(EntryId(1)));
        assert!(m.is_editing());
        m.set_name("New Mars");

        assert_eq!(m.submit(), SubmitOutcome::Updated(EntryId(1)));

        assert_eq!(m.len(), 2);
        assert_eq!(m.entries()[0].id, EntryId(1));
        assert_eq!(m.entries()[0].name, "New Mars");
        assert_eq!(m.entries()[0].description, "Mars description");
        assert_eq!(m.entries()[1], entry(2, "Venus"));
        assert!(!m.is_editing());
        assert_eq!(m.draft(), &Draft::default());
    }

    #[test]
    fn test_begin_edit_copies_entry_and_clears_selection() {
        let mut m = manager(vec![entry(1, "Mars"), entry(2, "Venus")]);
        m.select(EntryId(2));
        assert!(m.begin_edit(EntryId(1)));
        assert_eq!(m.draft(), &Draft::from_entry(&entry(1, "Mars")));
        assert_eq!(m.selected_id(), None);
    }

    #[test]
    fn test_begin_edit_unknown_id_changes_nothing() {
        let mut m = manager(vec![entry(1, "Mars")]);
        m.select(EntryId(1));
        assert!(!m.begin_edit(EntryId(42)));
        assert!(!m.is_editing());
        assert_eq!(m.selected_id(), Some(EntryId(1)));
    }

    #[test]
    fn test_cancel_edit_resets_draft_without_commit() {
        let mut m = manager(vec![entry(1, "Mars")]);
        m.begin_edit(EntryId(1));
        m.set_name("Changed");
        m.cancel_edit();
        assert!(!m.is_editing());
        assert_eq!(m.draft(), &Draft::default());
        assert_eq!(m.entries()[0].name, "Mars");
        assert!(m.hook().commits.is_empty());
    }

    #[test]
    fn test_delete_removes_and_commits() {
        let mut m = manager(vec![entry(3, "A"), entry(7, "B"), entry(9, "C")]);
        assert!(m.delete(EntryId(7)));
        assert_eq!(m.len(), 2);
        assert!(m.get(EntryId(7)).is_none());
        assert_eq!(m.hook().commits.len(), 1);
        assert_eq!(m.hook().commits[0].len(), 2);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut m = manager(vec![entry(3, "A"), entry(7, "B")]);
        assert!(!m.delete(EntryId(999)));
        assert_eq!(m.len(), 2);
        assert!(m.hook().commits.is_empty());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut m = manager(vec![entry(1, "A"), entry(2, "B")]);
        m.select(EntryId(2));
        m.delete(EntryId(1));
        assert_eq!(m.selected_id(), Some(EntryId(2)));
        m.delete(EntryId(2));
        assert_eq!(m.selected_id(), None);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut m = manager(vec![entry(1, "A"), entry(2, "B")]);
        assert!(m.select(EntryId(1)));
        assert!(m.select(EntryId(2)));
        assert_eq!(m.selected().map(|e| e.id), Some(EntryId(2)));
        m.deselect();
        assert!(m.selected().is_none());
        assert!(!m.select(EntryId(5)));
        assert!(m.selected().is_none());
        assert!(m.hook().commits.is_empty());
    }

    #[test]
    fn test_submit_rejects_empty_required_fields() {
        let mut m = manager(Vec::new());
        m.set_description("No name");
        assert_eq!(m.submit(), SubmitOutcome::Rejected(MissingField::Name));
        assert_eq!(m.draft().description, "No name");
        assert!(m.is_empty());
        assert!(m.hook().commits.is_empty());
    }

    #[test]
    fn test_submit_after_entry_deleted_mid_edit() {
        let mut m = manager(vec![entry(1, "Mars")]);
        m.begin_edit(EntryId(1));
        m.delete(EntryId(1));
        assert!(m.is_editing());
        assert_eq!(m.submit(), SubmitOutcome::Missing(EntryId(1)));
        assert!(m.is_empty());
        assert!(!m.is_editing());
        // Only the delete committed.
        assert_eq!(m.hook().commits.len(), 1);
    }

    #[test]
    fn test_rapid_creates_get_unique_ids() {
        let mut m = manager(Vec::new());
        for i in 0..50 {
            fill(&mut m, &format!("Planet {i}"), "Quick");
            m.submit();
        }
        let mut ids: Vec<_> = m.entries().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_new_ids_exceed_loaded_ids() {
        let far_future = u64::MAX / 2;
        let mut m = manager(vec![entry(far_future, "Future")]);
        fill(&mut m, "Now", "Created after");
        assert_eq!(m.submit(), SubmitOutcome::Created(EntryId(far_future + 1)));
    }

    #[test]
    fn test_creates_after_max_id_stay_unique() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            "planets",
            r#"[{"id":18446744073709551615,"name":"Edge","description":"Last id","image":""}]"#,
        );
        let mut m = LogManager::open(StoragePersister::new(store, "planets"));

        for name in ["First", "Second"] {
            fill(&mut m, name, "After the edge");
            assert!(matches!(m.submit(), SubmitOutcome::Created(_)));
        }

        let ids: Vec<_> = m.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [EntryId(u64::MAX), EntryId(1), EntryId(2)]);
        assert!(m.begin_edit(EntryId(1)));
        assert_eq!(m.draft().name, "First");
        assert!(m.delete(EntryId(u64::MAX)));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_dropped_on_construction() {
        let m = manager(vec![entry(1, "A"), entry(1, "B"), entry(2, "C")]);
        assert_eq!(m.len(), 2);
        assert_eq!(m.entries()[0].name, "A");
        assert!(m.hook().commits.is_empty());
    }

    #[test]
    fn test_image_travels_with_draft() {
        let mut m = manager(Vec::new());
        fill(&mut m, "Io", "Volcanic");
        let image = ImageDataUri::from_parts("image/png", b"pixels");
        m.set_image(Some(image.clone()));
        let SubmitOutcome::Created(id) = m.submit() else {
            panic!("expected Created");
        };
        assert_eq!(m.get(id).and_then(|e| e.image.clone()), Some(image));
    }

    #[test]
    fn test_open_with_unparseable_storage_starts_empty() {
        let mut store = MemoryStore::new();
        store.insert_raw("planets", "not valid json");
        let m = LogManager::open(StoragePersister::new(store, "planets"));
        assert!(m.is_empty());
        // Loading never rewrites storage.
        assert_eq!(m.hook().store().raw("planets"), Some("not valid json"));
    }

    #[test]
    fn test_persist_failure_keeps_memory_state() {
        let mut store = MemoryStore::with_quota(64);
        store.insert_raw("planets", "[]");
        let mut m = LogManager::open(StoragePersister::new(store, "planets"));
        m.set_name("Enormous");
        m.set_description("x".repeat(500));
        assert!(matches!(m.submit(), SubmitOutcome::Created(_)));
        assert_eq!(m.len(), 1);
        assert_eq!(m.hook().store().raw("planets"), Some("[]"));
    }
}
