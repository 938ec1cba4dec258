//! Main panel for the member admin table.

use egui::{Response, Ui};
use roster_business::{AdminTableAction, AdminTableState, dispatch_table_action};
use roster_states::StateCtx;

use super::alert::show_alert_modal;
use super::pagination::render_pagination;
use super::table::render_member_table;
use super::toolbar::{render_bulk_actions, render_toolbar};

/// Displays the admin table: search, table, bulk delete and pagination.
pub fn admin_table_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    // Collect actions (avoiding borrow issues)
    let mut actions: Vec<AdminTableAction> = Vec::new();

    let response = ui.vertical(|ui| {
        let state = state_ctx.state::<AdminTableState>();

        render_toolbar(ui, state, &mut actions);
        ui.add_space(8.0);

        render_member_table(ui, state, &mut actions);
        ui.add_space(8.0);

        render_bulk_actions(ui, state, &mut actions);
        ui.add_space(4.0);

        render_pagination(ui, state, &mut actions);

        if let Some(message) = state.alert()
            && show_alert_modal(ui, message)
        {
            actions.push(AdminTableAction::DismissAlert);
        }
    });

    for action in actions {
        dispatch_table_action(state_ctx, action);
    }

    response.response
}
