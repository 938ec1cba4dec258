use egui_kittest::Harness;
use roster_business::{AdminTableAction, MemberRecord, dispatch_table_action};
use roster_ui::state::State;
use roster_ui::widgets::admin_table_panel;

/// Members `U1..=U{count}` with ids `1..=count`.
pub fn members(count: usize) -> Vec<MemberRecord> {
    (1..=count)
        .map(|n| {
            MemberRecord::new(
                n.to_string(),
                format!("U{n}"),
                format!("u{n}@example.com"),
                if n % 5 == 0 { "admin" } else { "member" },
            )
        })
        .collect()
}

/// Harness rendering only the admin table panel over `records`.
pub fn panel_harness(records: Vec<MemberRecord>) -> Harness<'static, State> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            admin_table_panel(&mut state.ctx, ui);
        },
        State::with_members(records),
    );
    settle(&mut harness);
    harness
}

/// Run enough frames for a click to be applied and the result rendered.
pub fn settle<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..4 {
        harness.step();
    }
}

/// Apply `action` as if the operator had triggered it, then re-render.
#[allow(unused)]
pub fn act(harness: &mut Harness<'_, State>, action: AdminTableAction) {
    dispatch_table_action(&mut harness.state_mut().ctx, action);
    settle(harness);
}
