//! Operator intents, reduced onto `AdminTableState`.

use log::warn;
use ustr::Ustr;

use super::pagination::PageTarget;
use super::state::{AdminTableState, SaveEditError};

/// One thing the operator did in the table.
///
/// The UI collects these while rendering a frame and applies them
/// afterwards, so rendering never mutates state mid-iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminTableAction {
    Search(String),
    GoToPage(PageTarget),
    ToggleRow(Ustr),
    SelectAllOnPage,
    DeleteSelected,
    DeleteMember(Ustr),
    DeleteAll,
    BeginEdit(Ustr),
    EditDraftName(String),
    EditDraftEmail(String),
    SaveEdit,
    CancelEdit,
    DismissAlert,
}

impl AdminTableState {
    pub fn apply(&mut self, action: AdminTableAction) {
        match action {
            AdminTableAction::Search(term) => self.set_search(term),
            AdminTableAction::GoToPage(target) => self.go_to_page(target),
            AdminTableAction::ToggleRow(id) => self.toggle_row(id),
            AdminTableAction::SelectAllOnPage => self.select_all_on_page(),
            AdminTableAction::DeleteSelected => self.delete_selected(),
            AdminTableAction::DeleteMember(id) => self.delete_member(id),
            AdminTableAction::DeleteAll => self.delete_all(),
            AdminTableAction::BeginEdit(id) => self.begin_edit(id),
            AdminTableAction::EditDraftName(name) => self.edit_draft_name(name),
            AdminTableAction::EditDraftEmail(email) => self.edit_draft_email(email),
            AdminTableAction::SaveEdit => self.apply_save(),
            AdminTableAction::CancelEdit => self.cancel_edit(),
            AdminTableAction::DismissAlert => self.dismiss_alert(),
        }
    }

    fn apply_save(&mut self) {
        match self.save_edit() {
            Ok(()) => {}
            Err(err @ SaveEditError::BlankFields) => {
                warn!("Rejected save of {:?}: {err}", self.edit_mode());
                self.show_alert(err.to_string());
            }
            Err(err) => warn!("Ignored save: {err}"),
        }
    }
}
