//! Blocking alert shown when a save is rejected.

use egui::{Id, Modal, Ui};

/// Shows `message` in a modal. Returns `true` once the operator dismisses it.
pub fn show_alert_modal(ui: &mut Ui, message: &str) -> bool {
    let modal = Modal::new(Id::new("admin_table_alert")).show(ui.ctx(), |ui| {
        ui.set_width(280.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    modal.inner || modal.should_close()
}
