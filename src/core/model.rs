// Exploration Log - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// The persisted shape of `Entry` is `{id, name, description, image}` with an
// absent image written as "" so logs stay readable by older releases.

use crate::core::data_uri::ImageDataUri;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique entry identifier (a millisecond timestamp at creation time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Entry (one planet in the log)
// =============================================================================

/// A persisted planet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    #[serde(default, with = "image_field")]
    pub image: Option<ImageDataUri>,
}

// =============================================================================
// Draft (the form's working copy)
// =============================================================================

/// Which required form field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Description,
}

impl MissingField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }
}

/// Mutable working copy behind the create/edit form.
///
/// `id` is `Some` exactly while an existing entry is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<EntryId>,
    pub name: String,
    pub description: String,
    pub image: Option<ImageDataUri>,
}

impl Draft {
    /// Draft pre-filled from an existing entry (edit mode).
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id),
            name: entry.name.clone(),
            description: entry.description.clone(),
            image: entry.image.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// First required field that is still empty, if any.
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.name.is_empty() {
            Some(MissingField::Name)
        } else if self.description.is_empty() {
            Some(MissingField::Description)
        } else {
            None
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Build the entry this draft describes under the given id.
    pub fn to_entry(&self, id: EntryId) -> Entry {
        Entry {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// Serde adapter: `None` <-> `""`, also accepting `null` or a missing field.
mod image_field {
    use super::ImageDataUri;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        image: &Option<ImageDataUri>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(image.as_ref().map_or("", ImageDataUri::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ImageDataUri>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()).map(ImageDataUri::from_raw))
    }
}
