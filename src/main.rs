#![deny(unsafe_code)]

mod config;
mod constants;
mod gui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::{AdvanceSettings, ConfigStore, Configurator, store};

#[derive(Parser)]
#[command(name = "advance-settings")]
#[command(version)]
#[command(about = "Advance settings page for the translation workbench", long_about = None)]
struct Cli {
    /// Directory holding config.json (overrides ADVANCE_SETTINGS_RESOURCE_DIR)
    #[arg(long, value_name = "DIR")]
    resource_dir: Option<PathBuf>,

    /// Backfill config.json, print the effective configuration and exit
    #[arg(long)]
    print: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let max_level = if cli.verbose {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(max_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let configurator = Configurator::resolve(cli.resource_dir);
    info!(resource_dir = %configurator.resource_dir.display(), "Using resource directory");

    if cli.print {
        print_effective_config(&configurator)
    } else {
        gui::run_gui(configurator)
    }
}

fn print_effective_config(configurator: &Configurator) -> Result<()> {
    let store = ConfigStore::from_configurator(configurator);
    let config = store.initialize()?;

    let settings = AdvanceSettings::from_config(&config);
    debug!(
        cot = settings.cot,
        cn_prompt = settings.cn_prompt,
        preserve_line_breaks = settings.preserve_line_breaks,
        text_clear = settings.text_clear,
        response_conversion = settings.response_conversion,
        opencc_preset = %settings.opencc_preset,
        model_degradation_check = settings.reply_checks.model_degradation,
        residual_original_text_check = settings.reply_checks.residual_original_text,
        return_to_original_text_check = settings.reply_checks.return_to_original_text,
        "Effective advance settings"
    );

    println!("{}", store::to_pretty_json(&config)?);
    Ok(())
}
