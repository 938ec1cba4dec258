//! Table header rendering for the member table.

use egui::Ui;
use roster_business::AdminTableAction;

use super::cells::header_cell;

/// Header column labels after the select-all column.
const HEADERS: [&str; 5] = ["ID", "Name", "Email", "Role", "Actions"];

/// Renders the select-all toggle followed by the column labels.
pub fn render_table_header(
    ui: &mut Ui,
    select_all_label: &str,
    actions: &mut Vec<AdminTableAction>,
) {
    header_cell(ui, |ui| {
        if ui.button(select_all_label).clicked() {
            actions.push(AdminTableAction::SelectAllOnPage);
        }
    });
    for label in HEADERS {
        header_cell(ui, |ui| {
            ui.strong(label);
        });
    }
}
