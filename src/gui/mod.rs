//! GUI module - egui-based advance settings page

mod app;
pub mod bindings;
pub mod components;
pub mod state;

pub use app::run_gui;
