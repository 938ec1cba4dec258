//! One-shot loading of the member list.
//!
//! `LoadMembersCommand` performs the network request and reports back through
//! `Updater` into `MembersLoadState`. The frame loop then calls
//! `StateCtx::sync_states()` and dispatches `ApplyFetchedMembersCommand`,
//! which moves the fetched records into `AdminTableState`.
//!
//! A failed load is logged and leaves the table empty. There is no retry.

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use roster_states::{Command, Dep, State, Updater, state_assign_impl};
use std::any::Any;

use super::state::AdminTableState;
use crate::api::fetch_members;
use crate::{BusinessConfig, MemberRecord};

/// Progress of the member list load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MembersLoad {
    /// No request issued yet.
    #[default]
    Idle,

    /// Request in flight.
    Loading,

    /// Response decoded, not yet moved into the table.
    Fetched(Vec<MemberRecord>),

    /// Records handed to the table.
    Applied { count: usize, at: DateTime<Utc> },

    /// Request or decoding failed.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct MembersLoadState {
    pub status: MembersLoad,
}

impl MembersLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, MembersLoad::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            MembersLoad::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn applied_count(&self) -> Option<usize> {
        match self.status {
            MembersLoad::Applied { count, .. } => Some(count),
            _ => None,
        }
    }
}

impl State for MembersLoadState {
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

/// Fetches the member list from `BusinessConfig::members_url`.
///
/// Dispatch once at startup. A dispatch while a response is pending is
/// ignored.
#[derive(Debug, Default)]
pub struct LoadMembersCommand;

impl Command for LoadMembersCommand {
    fn run(&self, mut deps: Dep<'_>, updater: Updater) {
        let url = deps.get_state_ref::<BusinessConfig>().members_url().to_owned();

        let load = deps.state_mut::<MembersLoadState>();
        if matches!(load.status, MembersLoad::Loading | MembersLoad::Fetched(_)) {
            debug!("Members load already pending, skipping");
            return;
        }
        load.status = MembersLoad::Loading;

        info!("Loading members from {url}");
        let source = url.clone();
        fetch_members(&url, move |result| {
            let status = match result {
                Ok(records) => {
                    info!("Fetched {} members from {source}", records.len());
                    MembersLoad::Fetched(records)
                }
                Err(err) => {
                    error!("Error fetching members from {source}: {err}");
                    MembersLoad::Failed(err.to_string())
                }
            };
            updater.set(MembersLoadState { status });
        });
    }
}

/// Moves fetched records into `AdminTableState`, replacing what is there.
///
/// No-op unless the load status is `Fetched`.
#[derive(Debug, Default)]
pub struct ApplyFetchedMembersCommand;

impl Command for ApplyFetchedMembersCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let records = {
            let load = deps.state_mut::<MembersLoadState>();
            match std::mem::take(&mut load.status) {
                MembersLoad::Fetched(records) => {
                    load.status = MembersLoad::Applied {
                        count: records.len(),
                        at: Utc::now(),
                    };
                    records
                }
                other => {
                    load.status = other;
                    return;
                }
            }
        };

        deps.state_mut::<AdminTableState>().replace_records(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_states::StateCtx;

    fn setup_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::default());
        ctx.add_state(AdminTableState::default());
        ctx.add_state(MembersLoadState::default());
        ctx.record_command(LoadMembersCommand);
        ctx.record_command(ApplyFetchedMembersCommand);
        ctx
    }

    fn members() -> Vec<MemberRecord> {
        vec![
            MemberRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
            MemberRecord::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
        ]
    }

    #[test]
    fn apply_moves_fetched_records_into_table() {
        let mut ctx = setup_ctx();
        ctx.update::<MembersLoadState>(|load| load.status = MembersLoad::Fetched(members()));

        ctx.dispatch::<ApplyFetchedMembersCommand>();

        assert_eq!(ctx.state::<AdminTableState>().records(), members().as_slice());
        assert_eq!(ctx.state::<MembersLoadState>().applied_count(), Some(2));
    }

    #[test]
    fn apply_is_noop_unless_fetched() {
        let mut ctx = setup_ctx();
        ctx.update::<MembersLoadState>(|load| {
            load.status = MembersLoad::Failed("boom".to_string());
        });

        ctx.dispatch::<ApplyFetchedMembersCommand>();

        assert!(ctx.state::<AdminTableState>().records().is_empty());
        assert_eq!(ctx.state::<MembersLoadState>().error_message(), Some("boom"));
    }

    #[test]
    fn apply_runs_once_per_fetch() {
        let mut ctx = setup_ctx();
        ctx.update::<MembersLoadState>(|load| load.status = MembersLoad::Fetched(members()));
        ctx.dispatch::<ApplyFetchedMembersCommand>();
        ctx.update::<AdminTableState>(AdminTableState::delete_all);

        ctx.dispatch::<ApplyFetchedMembersCommand>();

        assert!(ctx.state::<AdminTableState>().records().is_empty());
    }

    #[test]
    fn load_is_skipped_while_pending() {
        let mut ctx = setup_ctx();
        ctx.update::<MembersLoadState>(|load| load.status = MembersLoad::Loading);

        ctx.dispatch::<LoadMembersCommand>();

        assert!(ctx.state::<MembersLoadState>().is_loading());
    }
}
