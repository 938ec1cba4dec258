//! View state of the member admin table.
//!
//! The record list is the single source of truth; everything the table
//! shows (filtered rows, current page, select-all label) is derived from it
//! on every query. Each operator intent is a method here, so the whole table
//! can be driven and tested without rendering.
//!
//! Invariants kept by every transition:
//! - the edit draft, when present, refers to a record in `records`
//! - every selected id refers to a record in `records`
//! - `page` stays within `[1, page_count(filtered_count)]`

use roster_states::{State, state_assign_impl};
use std::any::Any;
use std::collections::BTreeSet;
use thiserror::Error;
use ustr::Ustr;

use super::pagination::{PageTarget, clamp_page, has_next_page, page_count, page_range};
use crate::MemberRecord;

/// Message of the blocking alert shown when a save is rejected.
pub const BLANK_FIELDS_ALERT: &str = "Please fill in all fields before saving.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveEditError {
    #[error("no row is being edited")]
    NotEditing,
    #[error("member {0} no longer exists")]
    MissingRecord(Ustr),
    #[error("Please fill in all fields before saving.")]
    BlankFields,
}

/// Whether a row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing(Ustr),
}

/// Scratch copy of the record under edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EditDraft {
    fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.role]
            .iter()
            .any(|value| value.trim().is_empty())
    }
}

impl From<&MemberRecord> for EditDraft {
    fn from(record: &MemberRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }
}

/// State for the member admin table.
#[derive(Debug, Clone)]
pub struct AdminTableState {
    records: Vec<MemberRecord>,
    selection: BTreeSet<Ustr>,
    search: String,
    page: usize,
    draft: Option<EditDraft>,
    alert: Option<String>,
}

impl Default for AdminTableState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            selection: BTreeSet::new(),
            search: String::new(),
            page: 1,
            draft: None,
            alert: None,
        }
    }
}

impl State for AdminTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

impl AdminTableState {
    pub fn new(records: Vec<MemberRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Replace the record set wholesale, as after the initial load.
    pub fn replace_records(&mut self, records: Vec<MemberRecord>) {
        self.records = records;
        self.prune();
    }

    // =====================
    // Queries
    // =====================

    pub fn records(&self) -> &[MemberRecord] {
        &self.records
    }

    pub fn selection(&self) -> &BTreeSet<Ustr> {
        &self.selection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Pending blocking alert, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn edit_mode(&self) -> EditMode {
        match &self.draft {
            Some(draft) => EditMode::Editing(draft.id),
            None => EditMode::Viewing,
        }
    }

    pub fn is_editing(&self, id: Ustr) -> bool {
        self.edit_mode() == EditMode::Editing(id)
    }

    pub fn is_selected(&self, id: Ustr) -> bool {
        self.selection.contains(&id)
    }

    /// Records matching the search term, in record order.
    pub fn filtered_records(&self) -> Vec<&MemberRecord> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_records().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count())
    }

    /// Rows shown on the current page (at most `PAGE_SIZE`).
    pub fn page_items(&self) -> Vec<&MemberRecord> {
        let filtered = self.filtered_records();
        let range = page_range(self.page, filtered.len());
        filtered[range].to_vec()
    }

    pub fn page_ids(&self) -> Vec<Ustr> {
        self.page_items().iter().map(|record| record.id).collect()
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        has_next_page(self.page, self.filtered_count())
    }

    pub fn can_delete_selected(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Label of the header toggle, derived from what a click would do.
    pub fn select_all_label(&self) -> &'static str {
        let page_len = self.page_ids().len();
        if page_len > 0 && self.selection.len() == page_len {
            "Remove all"
        } else {
            "Select all"
        }
    }

    // =====================
    // Transitions
    // =====================

    /// Change the search term; always returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, target: PageTarget) {
        let len = self.filtered_count();
        self.page = match target {
            PageTarget::First => 1,
            PageTarget::Previous => self.page.saturating_sub(1),
            PageTarget::Next if has_next_page(self.page, len) => self.page + 1,
            PageTarget::Next => self.page,
            PageTarget::Last => page_count(len),
            PageTarget::Number(page) => page,
        };
        self.page = clamp_page(self.page, len);
    }

    /// Flip the checkbox of one row. Unknown ids are ignored.
    pub fn toggle_row(&mut self, id: Ustr) {
        if !self.selection.remove(&id) && self.contains(id) {
            self.selection.insert(id);
        }
    }

    /// Header toggle: clears everything when the selection is as large as
    /// the current page, otherwise selects exactly the current page.
    pub fn select_all_on_page(&mut self) {
        let page_ids = self.page_ids();
        if self.selection.len() == page_ids.len() {
            self.selection.clear();
        } else {
            self.selection = page_ids.into_iter().collect();
        }
    }

    /// Remove every selected record and clear the selection.
    pub fn delete_selected(&mut self) {
        let selection = std::mem::take(&mut self.selection);
        self.records.retain(|record| !selection.contains(&record.id));
        self.prune();
    }

    /// Remove the record with `id`.
    pub fn delete_member(&mut self, id: Ustr) {
        self.records.retain(|record| record.id != id);
        self.prune();
    }

    /// Remove every record, no confirmation.
    pub fn delete_all(&mut self) {
        self.records.clear();
        self.prune();
    }

    /// Enter edit mode for `id`, seeding the draft from the record.
    ///
    /// Replaces any draft in progress. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: Ustr) {
        if let Some(record) = self.records.iter().find(|record| record.id == id) {
            self.draft = Some(EditDraft::from(record));
        }
    }

    pub fn edit_draft_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.name = name.into();
        }
    }

    pub fn edit_draft_email(&mut self, email: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.email = email.into();
        }
    }

    /// Merge the draft into its record and leave edit mode.
    ///
    /// On error nothing changes and edit mode stays active.
    pub fn save_edit(&mut self) -> Result<(), SaveEditError> {
        let draft = self.draft.as_ref().ok_or(SaveEditError::NotEditing)?;
        if draft.has_blank_field() {
            return Err(SaveEditError::BlankFields);
        }
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == draft.id)
            .ok_or(SaveEditError::MissingRecord(draft.id))?;

        record.name.clone_from(&draft.name);
        record.email.clone_from(&draft.email);
        record.role.clone_from(&draft.role);
        self.draft = None;
        Ok(())
    }

    /// Drop the draft without touching the records.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn contains(&self, id: Ustr) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Restore the invariants after the record set shrank or was replaced.
    fn prune(&mut self) {
        let records = &self.records;
        self.selection
            .retain(|id| records.iter().any(|record| record.id == *id));
        if let Some(draft) = &self.draft
            && !records.iter().any(|record| record.id == draft.id)
        {
            self.draft = None;
        }
        self.page = clamp_page(self.page, self.filtered_count());
    }
}
