//! Commands that carry UI intents into `AdminTableState`.
//!
//! UI code follows the pattern:
//! - set the intent via `ctx.update::<AdminTableInput>(...)`
//! - dispatch `ApplyTableActionCommand`
//! - read `AdminTableState` on the next frame
//!
//! [`dispatch_table_action`] bundles the first two steps.

use roster_states::{Command, Dep, State, StateCtx, Updater, state_assign_impl};
use std::any::Any;

use super::action::AdminTableAction;
use super::state::AdminTableState;

/// Input slot read by `ApplyTableActionCommand`.
#[derive(Debug, Clone, Default)]
pub struct AdminTableInput {
    pub action: Option<AdminTableAction>,
}

impl State for AdminTableInput {
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

/// Applies (and consumes) `AdminTableInput.action`.
#[derive(Debug, Default)]
pub struct ApplyTableActionCommand;

impl Command for ApplyTableActionCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(action) = deps.state_mut::<AdminTableInput>().action.take() else {
            return;
        };

        deps.state_mut::<AdminTableState>().apply(action);
    }
}

pub fn dispatch_table_action(ctx: &mut StateCtx, action: AdminTableAction) {
    ctx.update::<AdminTableInput>(|input| input.action = Some(action));
    ctx.dispatch::<ApplyTableActionCommand>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemberRecord;
    use crate::admin_table::pagination::PageTarget;
    use ustr::Ustr;

    fn setup_ctx(count: usize) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(AdminTableState::new(
            (1..=count)
                .map(|n| {
                    MemberRecord::new(
                        n.to_string(),
                        format!("U{n}"),
                        format!("u{n}@example.com"),
                        "member",
                    )
                })
                .collect(),
        ));
        ctx.add_state(AdminTableInput::default());
        ctx.record_command(ApplyTableActionCommand);
        ctx
    }

    #[test]
    fn dispatch_applies_and_consumes_action() {
        let mut ctx = setup_ctx(12);

        dispatch_table_action(&mut ctx, AdminTableAction::GoToPage(PageTarget::Next));

        assert_eq!(ctx.state::<AdminTableState>().page(), 2);
        assert!(ctx.state::<AdminTableInput>().action.is_none());

        // Nothing left to apply.
        ctx.dispatch::<ApplyTableActionCommand>();
        assert_eq!(ctx.state::<AdminTableState>().page(), 2);
    }

    #[test]
    fn select_rows_then_delete_selected() {
        let mut ctx = setup_ctx(12);

        dispatch_table_action(&mut ctx, AdminTableAction::ToggleRow(Ustr::from("1")));
        dispatch_table_action(&mut ctx, AdminTableAction::ToggleRow(Ustr::from("3")));
        dispatch_table_action(&mut ctx, AdminTableAction::DeleteSelected);

        let state = ctx.state::<AdminTableState>();
        assert_eq!(state.records().len(), 10);
        assert!(
            state
                .records()
                .iter()
                .all(|record| record.name != "U1" && record.name != "U3")
        );
        assert!(state.selection().is_empty());
    }

    #[test]
    fn delete_all_through_command() {
        let mut ctx = setup_ctx(5);

        dispatch_table_action(&mut ctx, AdminTableAction::DeleteAll);

        assert!(ctx.state::<AdminTableState>().records().is_empty());
    }
}
