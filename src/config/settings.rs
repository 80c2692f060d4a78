//! Typed view over the advance settings document
//!
//! The raw document stays a JSON object so unknown keys survive a save; this
//! module projects the recognized keys into Rust types for consumers. Missing
//! or mistyped values read as their defaults.

use anyhow::{Result, anyhow};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::config::store::Configuration;
use crate::constants::{defaults, keys, reply_check};

/// OpenCC conversion preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenccPreset {
    #[default]
    S2t,
    S2tw,
    S2hk,
    S2twp,
    T2s,
    T2tw,
    T2hk,
    T2jp,
    Tw2s,
    Tw2t,
    Tw2sp,
    Hk2s,
    Hk2t,
    Jp2t,
}

impl OpenccPreset {
    pub const ALL: [OpenccPreset; 14] = [
        OpenccPreset::S2t,
        OpenccPreset::S2tw,
        OpenccPreset::S2hk,
        OpenccPreset::S2twp,
        OpenccPreset::T2s,
        OpenccPreset::T2tw,
        OpenccPreset::T2hk,
        OpenccPreset::T2jp,
        OpenccPreset::Tw2s,
        OpenccPreset::Tw2t,
        OpenccPreset::Tw2sp,
        OpenccPreset::Hk2s,
        OpenccPreset::Hk2t,
        OpenccPreset::Jp2t,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpenccPreset::S2t => "s2t",
            OpenccPreset::S2tw => "s2tw",
            OpenccPreset::S2hk => "s2hk",
            OpenccPreset::S2twp => "s2twp",
            OpenccPreset::T2s => "t2s",
            OpenccPreset::T2tw => "t2tw",
            OpenccPreset::T2hk => "t2hk",
            OpenccPreset::T2jp => "t2jp",
            OpenccPreset::Tw2s => "tw2s",
            OpenccPreset::Tw2t => "tw2t",
            OpenccPreset::Tw2sp => "tw2sp",
            OpenccPreset::Hk2s => "hk2s",
            OpenccPreset::Hk2t => "hk2t",
            OpenccPreset::Jp2t => "jp2t",
        }
    }
}

impl FromStr for OpenccPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown OpenCC preset: {s}"))
    }
}

impl fmt::Display for OpenccPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-rule enable flags of the reply check group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyChecks {
    pub model_degradation: bool,
    pub residual_original_text: bool,
    pub return_to_original_text: bool,
}

impl Default for ReplyChecks {
    fn default() -> Self {
        Self {
            model_degradation: defaults::REPLY_CHECK,
            residual_original_text: defaults::REPLY_CHECK,
            return_to_original_text: defaults::REPLY_CHECK,
        }
    }
}

impl ReplyChecks {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(rules) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        let rule = |name: &str| {
            rules
                .get(name)
                .and_then(Value::as_bool)
                .unwrap_or(defaults::REPLY_CHECK)
        };

        Self {
            model_degradation: rule(reply_check::MODEL_DEGRADATION),
            residual_original_text: rule(reply_check::RESIDUAL_ORIGINAL_TEXT),
            return_to_original_text: rule(reply_check::RETURN_TO_ORIGINAL_TEXT),
        }
    }
}

/// Effective advance settings consumed by the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceSettings {
    pub cot: bool,
    pub cn_prompt: bool,
    pub preserve_line_breaks: bool,
    pub text_clear: bool,
    pub response_conversion: bool,
    pub opencc_preset: OpenccPreset,
    pub reply_checks: ReplyChecks,
}

impl Default for AdvanceSettings {
    fn default() -> Self {
        Self::from_config(&Configuration::new())
    }
}

impl AdvanceSettings {
    pub fn from_config(config: &Configuration) -> Self {
        let flag = |key: &str, default: bool| {
            config.get(key).and_then(Value::as_bool).unwrap_or(default)
        };

        let opencc_preset = config
            .get(keys::OPENCC_PRESET)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            cot: flag(keys::COT_TOGGLE, defaults::COT),
            cn_prompt: flag(keys::CN_PROMPT_TOGGLE, defaults::CN_PROMPT),
            preserve_line_breaks: flag(
                keys::PRESERVE_LINE_BREAKS_TOGGLE,
                defaults::PRESERVE_LINE_BREAKS,
            ),
            text_clear: flag(keys::TEXT_CLEAR_TOGGLE, defaults::TEXT_CLEAR),
            response_conversion: flag(
                keys::RESPONSE_CONVERSION_TOGGLE,
                defaults::RESPONSE_CONVERSION,
            ),
            opencc_preset,
            reply_checks: ReplyChecks::from_value(config.get(keys::REPLY_CHECK_SWITCH)),
        }
    }
}
