// Exploration Log - core/mod.rs
//
// Core layer: data model, log codec, image data URIs, id assignment.
// Dependencies: standard library, serde, base64, image (format sniffing).
// Must NOT depend on: ui, platform, app.

pub mod codec;
pub mod data_uri;
pub mod ids;
pub mod model;
