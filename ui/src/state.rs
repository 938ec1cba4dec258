use roster_business::{AdminTableState, BusinessConfig, MemberRecord, register_admin_table};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_admin_table(&mut ctx, config);
        Self { ctx }
    }

    /// State that loads members from `members_url` instead of the production endpoint.
    pub fn test(members_url: impl AsRef<str>) -> Self {
        Self::with_config(BusinessConfig::new(members_url))
    }

    /// State with `records` already in the table, no load pending.
    pub fn with_members(records: Vec<MemberRecord>) -> Self {
        let mut state = Self::default();
        state
            .ctx
            .update::<AdminTableState>(|table| table.replace_records(records));
        state
    }
}
