//! The app loads members once at creation and renders them.

use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::{AdminTableState, MembersLoadState};
use roster_ui::AdminApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup_app(response: ResponseTemplate, expect: u64) -> (MockServer, Harness<'static, AdminApp>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    // Mount BEFORE creating the app: the load is issued in `AdminApp::new`.
    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(response)
        .expect(expect)
        .mount(&mock_server)
        .await;

    let state = State::test(format!("{}/members.json", mock_server.uri()));
    let app = AdminApp::new(state);
    let harness = Harness::new_eframe(|_| app);

    (mock_server, harness)
}

/// Step frames until the load settles.
async fn wait_for_load(harness: &mut Harness<'_, AdminApp>) {
    for _ in 0..50 {
        harness.step();
        if !harness
            .state()
            .state()
            .ctx
            .state::<MembersLoadState>()
            .is_loading()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    harness.step();
    harness.step();
}

#[tokio::test]
async fn test_members_fetched_on_app_create() {
    let body = serde_json::json!([
        {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
        {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"},
        {"id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "admin"}
    ]);
    let (_mock_server, mut harness) =
        setup_app(ResponseTemplate::new(200).set_body_json(body), 1).await;

    wait_for_load(&mut harness).await;

    let table = harness.state().state().ctx.state::<AdminTableState>();
    assert_eq!(table.records().len(), 3);
    assert!(harness.query_by_label("Aaron Miles").is_some());
    assert!(harness.query_by_label("Arvind Kumar").is_some());
}

#[tokio::test]
async fn test_no_refetch_on_subsequent_frames() {
    let (_mock_server, mut harness) =
        setup_app(ResponseTemplate::new(200).set_body_json(serde_json::json!([])), 1).await;

    wait_for_load(&mut harness).await;
    for _ in 0..10 {
        harness.step();
    }

    // The mock expectation verifies exactly 1 call when the mock server drops.
}

#[tokio::test]
async fn test_fetch_failure_renders_empty_table_without_error() {
    let (_mock_server, mut harness) = setup_app(ResponseTemplate::new(500), 1).await;

    wait_for_load(&mut harness).await;

    let ctx = &harness.state().state().ctx;
    assert!(ctx.state::<AdminTableState>().records().is_empty());
    assert!(ctx.state::<MembersLoadState>().error_message().is_some());
    assert!(harness.query_by_label_contains("Error").is_none());
    assert!(harness.query_by_label("Page 1 of 1").is_some());
}
