//! Member admin table widget.
//!
//! Rendering only reads `AdminTableState`; every click or edit becomes an
//! `AdminTableAction` that the panel dispatches after the frame is laid out.

mod alert;
mod pagination;
mod panel;
mod table;
mod toolbar;

pub use panel::admin_table_panel;
