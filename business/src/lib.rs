//! Domain layer of the roster admin table.

pub mod admin_table;
mod api;
mod config;
mod member;

use roster_states::StateCtx;

pub use admin_table::{
    AdminTableAction, AdminTableInput, AdminTableState, ApplyFetchedMembersCommand,
    ApplyTableActionCommand, BLANK_FIELDS_ALERT, EditDraft, EditMode, LoadMembersCommand,
    MembersLoad, MembersLoadState, PAGE_SIZE, PageTarget, SaveEditError, dispatch_table_action,
};
pub use api::{FetchError, fetch_members, parse_members};
pub use config::{BusinessConfig, MEMBERS_URL};
pub use member::MemberRecord;

/// Register every state and command the admin table needs.
pub fn register_admin_table(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(AdminTableState::default());
    ctx.add_state(AdminTableInput::default());
    ctx.add_state(MembersLoadState::default());
    ctx.record_command(ApplyTableActionCommand);
    ctx.record_command(LoadMembersCommand);
    ctx.record_command(ApplyFetchedMembersCommand);
}
