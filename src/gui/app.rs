//! Settings window implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::info;

use super::components;
use crate::config::{ConfigStore, Configurator};
use crate::constants::gui::*;
use crate::gui::bindings::ADVANCE_BINDINGS;
use crate::gui::state::PanelState;

struct SettingsApp {
    state: PanelState,
}

impl SettingsApp {
    fn new(_cc: &eframe::CreationContext<'_>, state: PanelState) -> Self {
        info!(
            bindings = ADVANCE_BINDINGS.len(),
            keys = state.config().len(),
            "Initializing advance settings page"
        );
        Self { state }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = &self.state.status_message {
            egui::TopBottomPanel::top("status_line").show(ctx, |ui| {
                ui.colored_label(message.color, &message.text);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(PAGE_MARGIN))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    // At most one control changes per frame
                    let mut pending = None;
                    for binding in ADVANCE_BINDINGS {
                        if let Some(edit) = components::render(ui, binding, &self.state) {
                            pending = Some(edit);
                        }
                        ui.add_space(ITEM_SPACING);
                    }

                    if let Some(edit) = pending {
                        self.state.edit(edit);
                    }
                });
            });
    }
}

pub fn run_gui(configurator: Configurator) -> Result<()> {
    let store = ConfigStore::from_configurator(&configurator);
    let state = PanelState::open(store)?;

    let title = format!("Advance Settings - v{}", env!("CARGO_PKG_VERSION"));
    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title(title.clone());

    let options = NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(SettingsApp::new(cc, state)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings window: {err}"))
}
