//! The default set: every recognized key and its fallback value

use serde_json::{Value, json};

use crate::config::store::Configuration;
use crate::constants::{defaults, keys, reply_check};

/// Rule names of the reply check group, in the order they are persisted
pub const REPLY_CHECK_RULES: &[&str] = &[
    reply_check::MODEL_DEGRADATION,
    reply_check::RESIDUAL_ORIGINAL_TEXT,
    reply_check::RETURN_TO_ORIGINAL_TEXT,
];

/// Build a fresh copy of the default set
pub fn defaults() -> Configuration {
    let mut config = Configuration::new();
    config.insert(keys::COT_TOGGLE.to_string(), json!(defaults::COT));
    config.insert(keys::CN_PROMPT_TOGGLE.to_string(), json!(defaults::CN_PROMPT));
    config.insert(
        keys::PRESERVE_LINE_BREAKS_TOGGLE.to_string(),
        json!(defaults::PRESERVE_LINE_BREAKS),
    );
    config.insert(keys::TEXT_CLEAR_TOGGLE.to_string(), json!(defaults::TEXT_CLEAR));
    config.insert(
        keys::RESPONSE_CONVERSION_TOGGLE.to_string(),
        json!(defaults::RESPONSE_CONVERSION),
    );
    config.insert(keys::OPENCC_PRESET.to_string(), json!(defaults::OPENCC_PRESET));
    config.insert(
        keys::REPLY_CHECK_SWITCH.to_string(),
        Value::Object(default_reply_checks()),
    );
    config
}

/// The default nested mapping for `reply_check_switch`
pub fn default_reply_checks() -> Configuration {
    REPLY_CHECK_RULES
        .iter()
        .map(|rule| (rule.to_string(), Value::Bool(defaults::REPLY_CHECK)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_key_in_order() {
        let config = defaults();
        let order: Vec<&str> = config.keys().map(String::as_str).collect();

        assert_eq!(
            order,
            vec![
                "cot_toggle",
                "cn_prompt_toggle",
                "preserve_line_breaks_toggle",
                "text_clear_toggle",
                "response_conversion_toggle",
                "opencc_preset",
                "reply_check_switch",
            ]
        );
    }

    #[test]
    fn test_default_values() {
        let config = defaults();

        assert_eq!(config["cot_toggle"], json!(false));
        assert_eq!(config["cn_prompt_toggle"], json!(false));
        assert_eq!(config["preserve_line_breaks_toggle"], json!(true));
        assert_eq!(config["text_clear_toggle"], json!(true));
        assert_eq!(config["response_conversion_toggle"], json!(false));
        assert_eq!(config["opencc_preset"], json!("s2t"));
        assert_eq!(
            config["reply_check_switch"],
            json!({
                "Model Degradation Check": true,
                "Residual Original Text Check": true,
                "Return to Original Text Check": true
            })
        );
    }

    #[test]
    fn test_defaults_are_fresh_copies() {
        let mut first = defaults();
        first.insert("cot_toggle".to_string(), json!(true));

        assert_eq!(defaults()["cot_toggle"], json!(false));
    }
}
