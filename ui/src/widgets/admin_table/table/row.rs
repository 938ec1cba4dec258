//! Row rendering for the member table.

use egui::{Color32, RichText, TextEdit, Ui};
use roster_business::{AdminTableAction, EditDraft, MemberRecord};

use super::cells::data_cell;
use crate::utils::colors::{COLOR_RED, SELECTED_ROW_COLOR};

const INPUT_WIDTH: f32 = 160.0;

/// Data needed to render a member row.
pub struct MemberRowData<'a> {
    pub record: &'a MemberRecord,
    pub is_selected: bool,
    /// Present only when this row is in edit mode.
    pub draft: Option<&'a EditDraft>,
}

/// Renders one row: checkbox, id, name, email, role and action buttons.
///
/// In edit mode name and email become inputs bound to the draft; role stays
/// read-only.
pub fn render_member_row(
    ui: &mut Ui,
    data: &MemberRowData<'_>,
    actions: &mut Vec<AdminTableAction>,
) {
    let id = data.record.id;
    let fill = if data.is_selected {
        SELECTED_ROW_COLOR
    } else {
        Color32::TRANSPARENT
    };

    data_cell(ui, fill, |ui| {
        let mut checked = data.is_selected;
        if ui
            .checkbox(&mut checked, "")
            .on_hover_text(format!("Select member {id}"))
            .changed()
        {
            actions.push(AdminTableAction::ToggleRow(id));
        }
    });

    data_cell(ui, fill, |ui| {
        ui.label(RichText::new(id.as_str()).monospace());
    });

    match data.draft {
        Some(draft) => {
            data_cell(ui, fill, |ui| {
                let mut name = draft.name.clone();
                if ui
                    .add(TextEdit::singleline(&mut name).desired_width(INPUT_WIDTH))
                    .changed()
                {
                    actions.push(AdminTableAction::EditDraftName(name));
                }
            });
            data_cell(ui, fill, |ui| {
                let mut email = draft.email.clone();
                if ui
                    .add(TextEdit::singleline(&mut email).desired_width(INPUT_WIDTH))
                    .changed()
                {
                    actions.push(AdminTableAction::EditDraftEmail(email));
                }
            });
        }
        None => {
            data_cell(ui, fill, |ui| {
                ui.label(&data.record.name);
            });
            data_cell(ui, fill, |ui| {
                ui.label(&data.record.email);
            });
        }
    }

    data_cell(ui, fill, |ui| {
        ui.label(&data.record.role);
    });

    data_cell(ui, fill, |ui| {
        ui.horizontal(|ui| {
            if data.draft.is_some() {
                if ui.button("Cancel").clicked() {
                    actions.push(AdminTableAction::CancelEdit);
                }
                if ui.button("Save").clicked() {
                    actions.push(AdminTableAction::SaveEdit);
                }
            } else if ui.button("Edit").clicked() {
                actions.push(AdminTableAction::BeginEdit(id));
            }
            if ui
                .button(RichText::new("Delete").color(COLOR_RED))
                .clicked()
            {
                actions.push(AdminTableAction::DeleteMember(id));
            }
        });
    });
}
