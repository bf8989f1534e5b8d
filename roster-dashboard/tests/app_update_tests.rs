// Root update tests
//
// The application-level update routes reducer output into runtime tasks
// and toasts; these cover that wiring without starting a window.

use std::time::Duration;

use roster_dashboard::app::AppConfig;
use roster_dashboard::app::bootstrap::{base_state, initial_messages};
use roster_dashboard::common::messages::DomainMessage;
use roster_dashboard::domains::ui::feedback_ui::{FeedbackMessage, ToastLevel};
use roster_dashboard::domains::users::UsersMessage;
use roster_dashboard::infra::api_client::ApiError;
use roster_dashboard::infra::testing::StubUserDirectory;
use roster_dashboard::state::State;
use roster_dashboard::update::update;

fn stub_state() -> State {
    let config = AppConfig::new("http://localhost:8080").with_test_stubs(true);
    base_state(&config)
}

#[test]
fn boot_loads_users_exactly_once() {
    let messages = initial_messages();

    assert_eq!(messages.len(), 1);
    assert!(matches!(
        messages[0],
        DomainMessage::Users(UsersMessage::LoadUsers)
    ));
}

#[test]
fn requests_raise_loading_until_completion() {
    let mut state = stub_state();

    let _task = update(&mut state, UsersMessage::LoadUsers.into());
    assert!(state.domains.users.state.is_loading());

    let _task = update(
        &mut state,
        UsersMessage::UsersLoaded(Ok(Vec::new())).into(),
    );
    assert!(!state.domains.users.state.is_loading());
}

#[test]
fn overlapping_requests_keep_overlay_up() {
    let mut state = stub_state();

    let _ = update(&mut state, UsersMessage::LoadUsers.into());
    let _ = update(&mut state, UsersMessage::LoadUsers.into());
    let _ = update(
        &mut state,
        UsersMessage::UsersLoaded(Ok(Vec::new())).into(),
    );

    assert!(state.domains.users.state.is_loading());
}

#[test]
fn reducer_notifications_become_toasts() {
    let mut state = stub_state();
    let _ = update(&mut state, UsersMessage::LoadUsers.into());

    let _ = update(
        &mut state,
        UsersMessage::UsersLoaded(Err("timed out".into())).into(),
    );

    let toasts = &state.domains.ui.state.toast_manager.toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, "Failed to fetch users.");
}

#[test]
fn toasts_can_be_dismissed() {
    let mut state = stub_state();
    let _ = update(
        &mut state,
        UsersMessage::DeleteCompleted(Err("gone".into())).into(),
    );
    let id = state.domains.ui.state.toast_manager.toasts[0].id;

    let _ = update(&mut state, FeedbackMessage::DismissToast(id).into());

    assert!(!state.domains.ui.state.toast_manager.has_toasts());
}

#[test]
fn tick_expires_toasts_after_ttl() {
    let config = AppConfig::new("http://localhost:8080")
        .with_test_stubs(true);
    let mut state = base_state(&AppConfig {
        toast_ttl: Duration::from_millis(100),
        ..config
    });
    let _ = update(
        &mut state,
        UsersMessage::DeleteCompleted(Err("gone".into())).into(),
    );
    let created_at = state.domains.ui.state.toast_manager.toasts[0].created_at;

    let _ = update(
        &mut state,
        FeedbackMessage::Tick(created_at + Duration::from_millis(50)).into(),
    );
    assert!(state.domains.ui.state.toast_manager.has_toasts());

    let _ = update(
        &mut state,
        FeedbackMessage::Tick(created_at + Duration::from_millis(100)).into(),
    );
    assert!(!state.domains.ui.state.toast_manager.has_toasts());
}

#[test]
fn config_values_reach_state() {
    let config = AppConfig::new("localhost:9090")
        .with_test_stubs(true)
        .with_min_spinner(Duration::from_millis(500));

    let state = base_state(&config);

    assert_eq!(&*state.server_url, "localhost:9090");
    assert_eq!(state.min_spinner, Duration::from_millis(500));
}

#[tokio::test]
async fn invalid_server_url_degrades_to_failing_directory() {
    let state = base_state(&AppConfig::new("http://exa mple.com"));

    let err = state.user_directory.list_users().await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected(_)));
    assert!(err.to_string().starts_with("Invalid server URL"));
}

#[tokio::test]
async fn stub_mode_serves_demo_users() {
    let state = stub_state();

    let users = state.user_directory.list_users().await.unwrap();

    assert_eq!(users, StubUserDirectory::with_demo_users().users());
}
