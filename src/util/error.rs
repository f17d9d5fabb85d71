// Exploration Log - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// None of these are ever shown to the user: load and persist failures
// degrade to an empty log or a dropped write, and are logged.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while reading the persisted log.
///
/// A missing key is not an error; stores report it as `Ok(None)`.
#[derive(Debug)]
pub enum LoadError {
    /// The backing file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The stored value is not a valid entry sequence.
    Parse {
        key: String,
        source: serde_json::Error,
    },

    /// The storage key contains characters that cannot name a file.
    InvalidKey { key: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Parse { key, source } => {
                write!(f, "Stored value for '{key}' is malformed: {source}")
            }
            Self::InvalidKey { key } => write!(f, "Invalid storage key '{key}'"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Persist errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the log to storage.
#[derive(Debug)]
pub enum PersistError {
    /// The log could not be serialised.
    Serialise { source: serde_json::Error },

    /// The serialised value exceeds the store's per-value quota.
    QuotaExceeded { key: String, size: usize, max: usize },

    /// The backing file could not be written or renamed into place.
    Write { path: PathBuf, source: io::Error },

    /// The storage key contains characters that cannot name a file.
    InvalidKey { key: String },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialise { source } => write!(f, "Failed to serialise log: {source}"),
            Self::QuotaExceeded { key, size, max } => write!(
                f,
                "Value for '{key}' is {size} bytes, exceeds storage quota of {max} bytes"
            ),
            Self::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
            Self::InvalidKey { key } => write!(f, "Invalid storage key '{key}'"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialise { source } => Some(source),
            Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Image errors
// ---------------------------------------------------------------------------

/// Errors related to image capture and display.
#[derive(Debug)]
pub enum ImageError {
    /// The selected file could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The bytes are not in any image format we recognise.
    UnrecognisedFormat,

    /// A stored image value is not a base64 data URI.
    InvalidDataUri { reason: String },

    /// The image payload could not be decoded into pixels.
    Decode { source: image::ImageError },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Cannot read image '{}': {source}", path.display())
            }
            Self::UnrecognisedFormat => write!(f, "File is not a recognised image format"),
            Self::InvalidDataUri { reason } => write!(f, "Invalid image data URI: {reason}"),
            Self::Decode { source } => write!(f, "Cannot decode image: {source}"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Decode { source } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_quota_message_names_key_and_sizes() {
        let e = PersistError::QuotaExceeded {
            key: "planets".to_string(),
            size: 2048,
            max: 1024,
        };
        let msg = e.to_string();
        assert!(msg.contains("planets"));
        assert!(msg.contains("2048"));
        assert!(msg.contains("1024"));
    }

    #[test]
    fn test_write_error_preserves_io_source() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e = PersistError::Write {
            path: PathBuf::from("/tmp/x.json"),
            source: io,
        };
        assert!(e.to_string().contains("/tmp/x.json"));
        let source = e.source().expect("write error must expose its io source");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_parse_error_preserves_json_source() {
        let json_err = serde_json::from_str::<Vec<u8>>("not valid json").unwrap_err();
        let e = LoadError::Parse {
            key: "planets".to_string(),
            source: json_err,
        };
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("Stored value for 'planets' is malformed"));
    }
}
