//! Member admin table: search, pagination, selection, inline edit, delete.
//!
//! State and commands live here so UI code can stay "dumb":
//! - UI reads `AdminTableState` and renders
//! - UI turns clicks into `AdminTableAction`s and dispatches them
//! - loading goes through `LoadMembersCommand` / `ApplyFetchedMembersCommand`

pub mod action;
pub mod commands;
pub mod load;
pub mod pagination;
pub mod state;

pub use action::AdminTableAction;
pub use commands::{AdminTableInput, ApplyTableActionCommand, dispatch_table_action};
pub use load::{ApplyFetchedMembersCommand, LoadMembersCommand, MembersLoad, MembersLoadState};
pub use pagination::{PAGE_SIZE, PageTarget};
pub use state::{AdminTableState, BLANK_FIELDS_ALERT, EditDraft, EditMode, SaveEditError};
