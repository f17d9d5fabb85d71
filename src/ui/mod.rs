// Exploration Log - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, direct storage I/O.

pub mod panels;
pub mod preview;
pub mod theme;
