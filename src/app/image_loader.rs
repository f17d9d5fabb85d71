// Exploration Log - app/image_loader.rs
//
// Reads a user-selected image file on a background thread and turns it into
// a data URI, delivering the result to the UI thread over an mpsc channel.
//
// Architecture:
//   - `ImageLoader` lives on the UI thread; `read_image_file` runs on a
//     background thread, one per selection.
//   - Starting a new read drops the previous receiver, so a slow earlier read
//     can never overwrite a newer choice.
//   - The result is applied to whatever draft is current when it arrives.

use crate::core::data_uri::ImageDataUri;
use crate::util::error::ImageError;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Message sent from the reader thread when it finishes.
#[derive(Debug)]
pub enum ImageLoadProgress {
    /// The file was read and encoded.
    Loaded { path: PathBuf, image: ImageDataUri },

    /// The file could not be read or is not an image.
    Failed { path: PathBuf, error: ImageError },
}

/// Read `path` and encode it as a data URI.
pub fn read_image_file(path: &Path) -> Result<ImageDataUri, ImageError> {
    let bytes = std::fs::read(path).map_err(|e| ImageError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    ImageDataUri::from_bytes(&bytes)
}

/// Runs at most one image read at a time on a background thread.
#[derive(Debug, Default)]
pub struct ImageLoader {
    progress_rx: Option<mpsc::Receiver<ImageLoadProgress>>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start reading `path`, superseding any read still in flight.
    pub fn start(&mut self, path: PathBuf) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        tracing::debug!(path = %path.display(), "Image read started");
        std::thread::spawn(move || {
            let msg = match read_image_file(&path) {
                Ok(image) => ImageLoadProgress::Loaded { path, image },
                Err(error) => ImageLoadProgress::Failed { path, error },
            };
            // Receiver dropped means a newer read replaced this one.
            let _ = tx.send(msg);
        });
    }

    pub fn is_loading(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Non-blocking check for the result of the current read.
    pub fn poll(&mut self) -> Option<ImageLoadProgress> {
        let rx = self.progress_rx.as_ref()?;
        match rx.try_recv() {
            Ok(msg) => {
                self.progress_rx = None;
                Some(msg)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.progress_rx = None;
                None
            }
        }
    }
}
