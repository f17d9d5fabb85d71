// Exploration Log - lib.rs
//
// Library entry point, exposing all non-GUI-shell modules for integration
// testing.
//
// The `gui` module (the eframe::App) lives in the binary crate and is not
// part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
