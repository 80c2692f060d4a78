use eframe::egui;

use super::card;
use crate::gui::bindings::{Binding, Edit};

pub fn ui(ui: &mut egui::Ui, binding: &Binding, checked: bool) -> Option<Edit> {
    let mut value = checked;
    let mut edit = None;

    card(ui, binding, |ui| {
        if ui.checkbox(&mut value, "").changed() {
            edit = Some(Edit::Switch {
                key: binding.key,
                checked: value,
            });
        }
    });

    edit
}
