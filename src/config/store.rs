//! JSON persistence for the advance settings document
//!
//! Every save re-reads the file on disk as its merge base, overlays the
//! tracked keys and writes the whole document back. Keys outside the default
//! set are carried through untouched.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Configurator;
use crate::config::defaults;
use crate::constants::config::INDENT;

/// Flat key/value configuration document
pub type Configuration = Map<String, Value>;

/// Load the document at `path`.
///
/// A missing file yields an empty configuration. A file that is not a JSON
/// object is an error.
pub fn load(path: &Path) -> Result<Configuration> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using empty configuration");
        return Ok(Configuration::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;

    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

    match value {
        Value::Object(config) => Ok(config),
        other => Err(anyhow!(
            "Expected a JSON object in {:?}, found {}",
            path,
            json_kind(&other)
        )),
    }
}

/// Merge `incoming` over the document at `path` and write it back.
///
/// For each key of `defaults`, the value from `incoming` wins when present;
/// otherwise the key is reset to its default, even if the file held another
/// value. Keys of `incoming` that are not in `defaults` are ignored.
pub fn merge_and_save(
    path: &Path,
    incoming: &Configuration,
    defaults: &Configuration,
) -> Result<Configuration> {
    let mut merged = load(path)?;

    for (key, default) in defaults {
        let value = incoming.get(key).unwrap_or(default);
        merged.insert(key.clone(), value.clone());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let json_string = to_pretty_json(&merged)?;
    fs::write(path, json_string)
        .with_context(|| format!("Failed to write config to {:?}", path))?;

    debug!(path = %path.display(), keys = merged.len(), "Saved config");
    Ok(merged)
}

/// Serialize with four-space indentation. Non-ASCII is written as-is.
pub fn to_pretty_json(config: &Configuration) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config
        .serialize(&mut serializer)
        .context("Failed to serialize config to JSON")?;
    String::from_utf8(buf).context("Serialized config is not valid UTF-8")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Config file bound to a fixed path and default set
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    defaults: Configuration,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            defaults: defaults::defaults(),
        }
    }

    pub fn from_configurator(configurator: &Configurator) -> Self {
        Self::new(configurator.config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Configuration> {
        load(&self.path)
    }

    /// Persist a snapshot and return the effective configuration
    pub fn save(&self, incoming: &Configuration) -> Result<Configuration> {
        merge_and_save(&self.path, incoming, &self.defaults)
    }

    /// Load and immediately re-save so every default key is backfilled
    /// while values already on disk are kept.
    pub fn initialize(&self) -> Result<Configuration> {
        let stored = self.load()?;
        let config = self.save(&stored)?;
        info!(
            path = %self.path.display(),
            stored_keys = stored.len(),
            keys = config.len(),
            "Initialized advance settings"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Configuration {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load(&path).unwrap();

        assert!(config.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{\"cot_toggle\": tru").unwrap();

        let err = load(&path).unwrap_err();

        assert!(err.downcast_ref::<serde_json::Error>().is_some());
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_load_non_object_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load(&path).unwrap_err();

        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_empty_incoming_persists_every_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let defaults = defaults::defaults();

        merge_and_save(&path, &Configuration::new(), &defaults).unwrap();

        let persisted = load(&path).unwrap();
        for (key, value) in &defaults {
            assert_eq!(persisted.get(key), Some(value), "key {key}");
        }
    }

    #[test]
    fn test_incoming_value_wins_on_first_save() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let defaults = object(json!({"cot_toggle": false}));
        let incoming = object(json!({"cot_toggle": true}));

        let merged = merge_and_save(&path, &incoming, &defaults).unwrap();

        assert_eq!(Value::Object(merged), json!({"cot_toggle": true}));
        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({"cot_toggle": true}));
    }

    #[test]
    fn test_absent_key_reverts_to_default_and_extra_keys_survive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"opencc_preset": "t2s", "extra_key": 1}"#).unwrap();
        let defaults = object(json!({"opencc_preset": "s2t"}));

        let merged = merge_and_save(&path, &Configuration::new(), &defaults).unwrap();

        assert_eq!(
            Value::Object(merged),
            json!({"opencc_preset": "s2t", "extra_key": 1})
        );
    }

    #[test]
    fn test_untracked_incoming_keys_are_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let defaults = object(json!({"cot_toggle": false}));
        let incoming = object(json!({"cot_toggle": true, "unknown": "value"}));

        let merged = merge_and_save(&path, &incoming, &defaults).unwrap();

        assert!(!merged.contains_key("unknown"));
    }

    #[test]
    fn test_nested_mapping_replaced_wholesale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let defaults = defaults::defaults();
        merge_and_save(&path, &Configuration::new(), &defaults).unwrap();

        let incoming = object(json!({
            "reply_check_switch": {"Model Degradation Check": false}
        }));
        let merged = merge_and_save(&path, &incoming, &defaults).unwrap();

        assert_eq!(
            merged["reply_check_switch"],
            json!({"Model Degradation Check": false})
        );
        assert_eq!(
            load(&path).unwrap()["reply_check_switch"],
            json!({"Model Degradation Check": false})
        );
    }

    #[test]
    fn test_save_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let defaults = defaults::defaults();
        let config = object(json!({"cot_toggle": true, "opencc_preset": "t2tw"}));

        merge_and_save(&path, &config, &defaults).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        merge_and_save(&path, &config, &defaults).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_returns_what_was_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"window": {"w": 3}, "cot_toggle": true}"#).unwrap();
        let incoming = object(json!({"cn_prompt_toggle": true}));

        let merged = merge_and_save(&path, &incoming, &defaults::defaults()).unwrap();

        assert_eq!(load(&path).unwrap(), merged);
    }

    #[test]
    fn test_malformed_file_is_left_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let result = merge_and_save(&path, &Configuration::new(), &defaults::defaults());

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_output_format_indent_and_unicode() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"note": "繁體中文"}"#).unwrap();
        let defaults = object(json!({"cot_toggle": false}));

        merge_and_save(&path, &Configuration::new(), &defaults).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "{\n    \"note\": \"繁體中文\",\n    \"cot_toggle\": false\n}"
        );
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("resource").join("config.json");

        merge_and_save(&path, &Configuration::new(), &defaults::defaults()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_store_initialize_backfills_and_keeps_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"cot_toggle": true, "opencc_preset": "hk2s"}"#).unwrap();
        let store = ConfigStore::new(&path);

        let config = store.initialize().unwrap();

        assert_eq!(config["cot_toggle"], json!(true));
        assert_eq!(config["opencc_preset"], json!("hk2s"));
        assert_eq!(config["text_clear_toggle"], json!(true));
        assert_eq!(config.len(), defaults::defaults().len());
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_store_paths_from_configurator() {
        let configurator = Configurator::new("/tmp/advance-settings-resource");
        let store = ConfigStore::from_configurator(&configurator);

        assert_eq!(
            store.path(),
            Path::new("/tmp/advance-settings-resource/config.json")
        );
    }
}
