//! Configuration management
//!
//! Handles the advance settings document: a flat JSON object persisted at
//! `<resource_dir>/config.json`, backfilled from a compile-time default set.

pub mod configurator;
pub mod defaults;
pub mod settings;
pub mod store;

pub use configurator::Configurator;
pub use settings::AdvanceSettings;
pub use store::{ConfigStore, Configuration};
