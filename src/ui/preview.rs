// Exploration Log - ui/preview.rs
//
// Decodes entry images into egui textures for the detail window.
// Textures are cached by a hash of the data URI so an image is decoded once,
// not every frame. Undecodable images are remembered too, so a broken value
// is logged once rather than per frame.

use crate::core::data_uri::ImageDataUri;
use crate::util::constants::{MAX_CACHED_PREVIEWS, MAX_PREVIEW_EDGE_PX};
use crate::util::error::ImageError;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Decode a data URI into pixels, downscaled to fit the preview bound.
pub fn decode_preview(uri: &ImageDataUri) -> Result<egui::ColorImage, ImageError> {
    let (_, bytes) = uri.parse()?;
    let mut img = image::load_from_memory(&bytes).map_err(|e| ImageError::Decode { source: e })?;
    if img.width() > MAX_PREVIEW_EDGE_PX || img.height() > MAX_PREVIEW_EDGE_PX {
        img = img.thumbnail(MAX_PREVIEW_EDGE_PX, MAX_PREVIEW_EDGE_PX);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn cache_key(uri: &ImageDataUri) -> u64 {
    let mut hasher = DefaultHasher::new();
    uri.hash(&mut hasher);
    hasher.finish()
}

/// Texture cache for entry images.
#[derive(Default)]
pub struct ImagePreviews {
    textures: HashMap<u64, egui::TextureHandle>,
    failed: HashSet<u64>,
}

impl ImagePreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `uri`, decoding and uploading it on first use.
    ///
    /// Returns `None` if the image cannot be decoded.
    pub fn texture(&mut self, ctx: &egui::Context, uri: &ImageDataUri) -> Option<&egui::TextureHandle> {
        let key = cache_key(uri);
        if self.failed.contains(&key) {
            return None;
        }
        if !self.textures.contains_key(&key) {
            match decode_preview(uri) {
                Ok(pixels) => {
                    if self.textures.len() >= MAX_CACHED_PREVIEWS {
                        self.textures.clear();
                    }
                    let handle = ctx.load_texture(
                        format!("planet-image-{key:016x}"),
                        pixels,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(key, handle);
                }
                Err(e) => {
                    tracing::warn!(image = %uri, error = %e, "Cannot display entry image");
                    self.failed.insert(key);
                    return None;
                }
            }
        }
        self.textures.get(&key)
    }
}
