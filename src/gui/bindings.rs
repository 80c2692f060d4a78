//! Control table for the advance settings page
//!
//! Each entry binds one config key to one control. Rendering walks the table
//! and every interaction comes back as an [`Edit`], applied to the current
//! snapshot by [`apply_edit`].

use serde_json::Value;

use crate::config::Configuration;
use crate::config::defaults::default_reply_checks;
use crate::constants::{keys, opencc, reply_check};

/// Kind of control bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Boolean key rendered as a switch
    Switch,
    /// String key chosen from a fixed list
    Choice(&'static [&'static str]),
    /// Nested string→bool mapping rendered as pill toggles: (label, rule key)
    CheckGroup(&'static [(&'static str, &'static str)]),
}

/// One setting on the page: its card text, config key and control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub title: &'static str,
    pub description: &'static str,
    pub key: &'static str,
    pub control: Control,
}

pub const REPLY_CHECK_PILLS: &[(&str, &str)] = &[
    ("Model degradation", reply_check::MODEL_DEGRADATION),
    ("Return to original text", reply_check::RETURN_TO_ORIGINAL_TEXT),
    ("Residual original text", reply_check::RESIDUAL_ORIGINAL_TEXT),
];

pub const ADVANCE_BINDINGS: &[Binding] = &[
    Binding {
        title: "Chain-of-thought mode",
        description: "Advanced prompting mode that improves translations on models with strong \
                      reasoning at the cost of more tokens (not supported by Sakura models)",
        key: keys::COT_TOGGLE,
        control: Control::Switch,
    },
    Binding {
        title: "Chinese prompt",
        description: "Use Chinese prompts instead of the default English prompts (Sakura models \
                      always use Chinese prompts)",
        key: keys::CN_PROMPT_TOGGLE,
        control: Control::Switch,
    },
    Binding {
        title: "Preserve in-sentence line breaks",
        description: "Try to keep the line breaks inside each sentence",
        key: keys::PRESERVE_LINE_BREAKS_TOGGLE,
        control: Control::Switch,
    },
    Binding {
        title: "Preserve leading/trailing non-text characters",
        description: "Try to keep non-text characters at the start and end of each sentence \
                      (Japanese source text only)",
        key: keys::TEXT_CLEAR_TOGGLE,
        control: Control::Switch,
    },
    Binding {
        title: "Automatic script conversion",
        description: "Convert between Simplified and Traditional Chinese with the selected \
                      preset once translation finishes",
        key: keys::RESPONSE_CONVERSION_TOGGLE,
        control: Control::Switch,
    },
    Binding {
        title: "Script conversion preset",
        description: "Character mapping used by script conversion, commonly s2t (Simplified to \
                      Traditional) or t2s (Traditional to Simplified)",
        key: keys::OPENCC_PRESET,
        control: Control::Choice(opencc::PRESETS),
    },
    Binding {
        title: "Translation result checks",
        description: "Enabled rules are checked against every translation result; a match marks \
                      the task as failed",
        key: keys::REPLY_CHECK_SWITCH,
        control: Control::CheckGroup(REPLY_CHECK_PILLS),
    },
];

/// A single user interaction with a bound control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Switch {
        key: &'static str,
        checked: bool,
    },
    Choice {
        key: &'static str,
        value: String,
    },
    Check {
        key: &'static str,
        rule: &'static str,
        checked: bool,
    },
}

/// Return a new snapshot with `edit` applied. `config` is left as is.
///
/// A check edit rewrites the whole nested mapping, carrying the sibling rules
/// over from the snapshot, since the store replaces nested values wholesale.
pub fn apply_edit(config: &Configuration, edit: &Edit) -> Configuration {
    let mut next = config.clone();

    match edit {
        Edit::Switch { key, checked } => {
            next.insert(key.to_string(), Value::Bool(*checked));
        }
        Edit::Choice { key, value } => {
            next.insert(key.to_string(), Value::String(value.clone()));
        }
        Edit::Check { key, rule, checked } => {
            let mut rules = match config.get(*key) {
                Some(Value::Object(rules)) => rules.clone(),
                _ => default_reply_checks(),
            };
            rules.insert(rule.to_string(), Value::Bool(*checked));
            next.insert(key.to_string(), Value::Object(rules));
        }
    }

    next
}
