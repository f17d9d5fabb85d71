// Exploration Log - app/mod.rs
//
// Application layer: the log state machine, its persistence hook,
// background image reads, and UI-facing state.
// Dependencies: core, platform (storage trait), util.
// Must NOT depend on: ui.

pub mod image_loader;
pub mod log_manager;
pub mod persistence;
pub mod state;
