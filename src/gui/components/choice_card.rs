use eframe::egui;

use super::card;
use crate::gui::bindings::{Binding, Edit};

/// Dropdown over `options`; only a change of selection produces an edit
pub fn ui(
    ui: &mut egui::Ui,
    binding: &Binding,
    options: &[&str],
    selected: usize,
) -> Option<Edit> {
    let mut edit = None;
    let selected_text = options.get(selected).copied().unwrap_or_default();

    card(ui, binding, |ui| {
        egui::ComboBox::from_id_salt(binding.key)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (idx, option) in options.iter().enumerate() {
                    if ui.selectable_label(idx == selected, *option).clicked() && idx != selected {
                        edit = Some(Edit::Choice {
                            key: binding.key,
                            value: option.to_string(),
                        });
                    }
                }
            });
    });

    edit
}
