//! Table components for the member admin table.
//!
//! - `header`: select-all toggle and column labels
//! - `row`: one member row, in view or edit mode
//! - `cells`: framed cell helpers shared by header and rows

mod cells;
pub mod header;
pub mod row;

use egui::{Frame, Grid, Margin, ScrollArea, Stroke, Ui};
use roster_business::{AdminTableAction, AdminTableState};

use crate::utils::colors::TABLE_BORDER_COLOR;
use header::render_table_header;
use row::{MemberRowData, render_member_row};

/// Number of grid columns: checkbox, ID, Name, Email, Role, Actions.
pub const COLUMN_COUNT: usize = 6;

/// Renders the current page of members with a Typora-like table style.
pub fn render_member_table(
    ui: &mut Ui,
    state: &AdminTableState,
    actions: &mut Vec<AdminTableAction>,
) {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("members_table")
                    .num_columns(COLUMN_COUNT)
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        render_table_header(ui, state.select_all_label(), actions);
                        ui.end_row();

                        for record in state.page_items() {
                            let data = MemberRowData {
                                record,
                                is_selected: state.is_selected(record.id),
                                draft: state.draft().filter(|draft| draft.id == record.id),
                            };
                            render_member_row(ui, &data, actions);
                            ui.end_row();
                        }
                    });
            });
        });
}
