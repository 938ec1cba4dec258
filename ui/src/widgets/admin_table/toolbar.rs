//! Controls above and below the table.

use egui::{Button, RichText, TextEdit, Ui};
use roster_business::{AdminTableAction, AdminTableState};

use crate::utils::colors::COLOR_RED;

/// Search box and the "Delete All" button.
pub fn render_toolbar(ui: &mut Ui, state: &AdminTableState, actions: &mut Vec<AdminTableAction>) {
    ui.horizontal(|ui| {
        let mut search = state.search().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Search...")
                .desired_width(240.0),
        );
        if response.changed() {
            actions.push(AdminTableAction::Search(search));
        }

        if ui
            .button(RichText::new("Delete All").color(COLOR_RED))
            .clicked()
        {
            actions.push(AdminTableAction::DeleteAll);
        }
    });
}

/// "Delete Selected", enabled only while something is checked.
pub fn render_bulk_actions(
    ui: &mut Ui,
    state: &AdminTableState,
    actions: &mut Vec<AdminTableAction>,
) {
    let count = state.selection().len();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.can_delete_selected(), Button::new("Delete Selected"))
            .clicked()
        {
            actions.push(AdminTableAction::DeleteSelected);
        }
        if count > 0 {
            ui.weak(format!("{count} selected"));
        }
    });
}
