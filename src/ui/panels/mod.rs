// Exploration Log - ui/panels/mod.rs

pub mod about;
pub mod detail;
pub mod form;
pub mod log_list;
