use eframe::egui;

use crate::constants::gui::PILL_SPACING;
use crate::gui::bindings::{Binding, Edit};

/// Title and description above a wrapped row of toggle pills, one per rule
pub fn ui(
    ui: &mut egui::Ui,
    binding: &Binding,
    pills: &[(&'static str, &'static str)],
    is_checked: impl Fn(&str) -> bool,
) -> Option<Edit> {
    let mut edit = None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(binding.title).strong());
        ui.label(egui::RichText::new(binding.description).small().weak());

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = PILL_SPACING;
            for &(label, rule) in pills {
                let mut checked = is_checked(rule);
                if ui.toggle_value(&mut checked, label).changed() {
                    edit = Some(Edit::Check {
                        key: binding.key,
                        rule,
                        checked,
                    });
                }
            }
        });
    });

    edit
}
