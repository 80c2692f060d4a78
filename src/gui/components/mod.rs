//! One card per bound setting

pub mod choice_card;
pub mod pill_card;
pub mod switch_card;

use eframe::egui;

use crate::gui::bindings::{Binding, Control, Edit};
use crate::gui::state::PanelState;

/// Render the control for `binding` and return the edit it produced, if any
pub fn render(ui: &mut egui::Ui, binding: &Binding, state: &PanelState) -> Option<Edit> {
    match binding.control {
        Control::Switch => switch_card::ui(ui, binding, state.is_checked(binding.key)),
        Control::Choice(options) => {
            choice_card::ui(ui, binding, options, state.choice_index(binding.key, options))
        }
        Control::CheckGroup(pills) => pill_card::ui(ui, binding, pills, |rule| {
            state.is_rule_checked(binding.key, rule)
        }),
    }
}

/// Title and description on the left, `control` on the right
fn card(ui: &mut egui::Ui, binding: &Binding, control: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(binding.title).strong());
                ui.label(egui::RichText::new(binding.description).small().weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), control);
        });
    });
}
