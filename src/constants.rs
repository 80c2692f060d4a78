//! Application-wide constants
//!
//! Config keys, default values, preset lists and GUI metrics live here so the
//! store, the typed view and the panel bindings agree on a single spelling.

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "advance-settings";

    /// Resource directory name inside the application directory
    pub const RESOURCE_SUBDIR: &str = "resource";

    /// Configuration filename inside the resource directory
    pub const FILENAME: &str = "config.json";

    /// Environment variable overriding the resource directory
    pub const RESOURCE_DIR_ENV: &str = "ADVANCE_SETTINGS_RESOURCE_DIR";

    /// Indentation used when writing config.json
    pub const INDENT: &[u8] = b"    ";
}

/// Top-level keys of config.json
pub mod keys {
    pub const COT_TOGGLE: &str = "cot_toggle";
    pub const CN_PROMPT_TOGGLE: &str = "cn_prompt_toggle";
    pub const PRESERVE_LINE_BREAKS_TOGGLE: &str = "preserve_line_breaks_toggle";
    pub const TEXT_CLEAR_TOGGLE: &str = "text_clear_toggle";
    pub const RESPONSE_CONVERSION_TOGGLE: &str = "response_conversion_toggle";
    pub const OPENCC_PRESET: &str = "opencc_preset";
    pub const REPLY_CHECK_SWITCH: &str = "reply_check_switch";
}

/// Rule names inside the `reply_check_switch` mapping
pub mod reply_check {
    pub const MODEL_DEGRADATION: &str = "Model Degradation Check";
    pub const RESIDUAL_ORIGINAL_TEXT: &str = "Residual Original Text Check";
    pub const RETURN_TO_ORIGINAL_TEXT: &str = "Return to Original Text Check";
}

/// OpenCC conversion presets, in dropdown order
pub mod opencc {
    pub const PRESETS: &[&str] = &[
        "s2t", "s2tw", "s2hk", "s2twp", "t2s", "t2tw", "t2hk", "t2jp", "tw2s", "tw2t", "tw2sp",
        "hk2s", "hk2t", "jp2t",
    ];
}

/// Default configuration values
/// These backfill any key missing from config.json
pub mod defaults {
    /// Chain-of-thought prompting mode
    pub const COT: bool = false;

    /// Chinese prompt language
    pub const CN_PROMPT: bool = false;

    /// Preserve line breaks inside a sentence
    pub const PRESERVE_LINE_BREAKS: bool = true;

    /// Preserve leading/trailing non-text characters
    pub const TEXT_CLEAR: bool = true;

    /// Post-translation script conversion
    pub const RESPONSE_CONVERSION: bool = false;

    /// OpenCC preset used by script conversion
    pub const OPENCC_PRESET: &str = "s2t";

    /// Every reply check rule starts enabled
    pub const REPLY_CHECK: bool = true;
}

/// GUI-specific constants (egui settings window)
pub mod gui {
    use egui;

    /// Settings window dimensions
    pub const WINDOW_WIDTH: f32 = 760.0;
    pub const WINDOW_HEIGHT: f32 = 640.0;
    pub const WINDOW_MIN_WIDTH: f32 = 480.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 360.0;

    /// Layout spacing
    pub const PAGE_MARGIN: f32 = 24.0;
    pub const ITEM_SPACING: f32 = 8.0;
    pub const PILL_SPACING: f32 = 4.0;

    /// Alert level colors
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 100, 100); // Red - save/load failures
}
