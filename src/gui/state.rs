use anyhow::Result;
use eframe::egui;
use serde_json::Value;
use tracing::{error, info};

use crate::config::{ConfigStore, Configuration, defaults};
use crate::constants::gui::*;
use crate::gui::bindings::{Edit, apply_edit};

/// One-line message shown above the settings page
pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

/// Settings page state: the store and the last configuration it returned
pub struct PanelState {
    store: ConfigStore,
    config: Configuration,
    defaults: Configuration,
    pub status_message: Option<StatusMessage>,
}

impl PanelState {
    /// Backfill the document on disk and seed the controls from it
    pub fn open(store: ConfigStore) -> Result<Self> {
        let config = store.initialize()?;
        Ok(Self {
            store,
            config,
            defaults: defaults::defaults(),
            status_message: None,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Apply an edit and persist it. On failure the previous snapshot stays
    /// in place and the error is shown in the status line.
    pub fn edit(&mut self, edit: Edit) -> bool {
        let next = apply_edit(&self.config, &edit);

        match self.store.save(&next) {
            Ok(saved) => {
                info!(?edit, "Advance setting changed");
                self.config = saved;
                self.status_message = None;
                true
            }
            Err(err) => {
                error!(error = ?err, path = %self.store.path().display(), "Failed to save advance settings");
                self.status_message = Some(StatusMessage {
                    text: format!("Save failed: {err}"),
                    color: COLOR_ERROR,
                });
                false
            }
        }
    }

    /// Stored flag, or its default when missing or not a boolean
    pub fn is_checked(&self, key: &str) -> bool {
        self.config
            .get(key)
            .and_then(Value::as_bool)
            .or_else(|| self.defaults.get(key).and_then(Value::as_bool))
            .unwrap_or(false)
    }

    /// Index of the stored value in `options`, or the first option when the
    /// stored value is missing or unknown
    pub fn choice_index(&self, key: &str, options: &[&str]) -> usize {
        self.config
            .get(key)
            .and_then(Value::as_str)
            .and_then(|value| options.iter().position(|option| *option == value))
            .unwrap_or(0)
    }

    /// Stored rule flag, or the rule's default when the group is partial
    /// or mistyped
    pub fn is_rule_checked(&self, key: &str, rule: &str) -> bool {
        let rule_flag = |config: &Configuration| {
            config
                .get(key)
                .and_then(Value::as_object)
                .and_then(|rules| rules.get(rule))
                .and_then(Value::as_bool)
        };

        rule_flag(&self.config)
            .or_else(|| rule_flag(&self.defaults))
            .unwrap_or(false)
    }
}
