// Exploration Log - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, util.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod storage;
