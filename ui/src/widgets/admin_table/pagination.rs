//! Page navigation controls.

use egui::{Button, Ui};
use roster_business::{AdminTableAction, AdminTableState, PageTarget};

pub fn render_pagination(
    ui: &mut Ui,
    state: &AdminTableState,
    actions: &mut Vec<AdminTableAction>,
) {
    let mut target = None;

    ui.horizontal(|ui| {
        if ui.button("First Page").clicked() {
            target = Some(PageTarget::First);
        }
        if ui
            .add_enabled(state.can_go_previous(), Button::new("Previous Page"))
            .clicked()
        {
            target = Some(PageTarget::Previous);
        }

        ui.label(format!("Page {} of {}", state.page(), state.page_count()));

        if ui
            .add_enabled(state.can_go_next(), Button::new("Next Page"))
            .clicked()
        {
            target = Some(PageTarget::Next);
        }
        if ui.button("Last Page").clicked() {
            target = Some(PageTarget::Last);
        }
    });

    if let Some(target) = target {
        actions.push(AdminTableAction::GoToPage(target));
    }
}
