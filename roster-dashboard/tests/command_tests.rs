// Command executor tests
//
// Timing runs on a paused tokio clock so the minimum spinner duration can
// be checked without real sleeps.

use std::sync::Arc;
use std::time::Duration;

use roster_dashboard::domains::users::{
    SubmitOutcome, UserCommand, UsersMessage, execute_user_command,
};
use roster_dashboard::infra::services::{UnreachableDirectory, UserDirectory};
use roster_dashboard::infra::testing::StubUserDirectory;
use roster_model::{Role, UserId, UserPayload};
use tokio::time::Instant;

fn stub() -> Arc<dyn UserDirectory> {
    Arc::new(StubUserDirectory::with_demo_users())
}

#[tokio::test(start_paused = true)]
async fn completion_waits_for_min_spinner() {
    let started = Instant::now();

    let message = execute_user_command(
        stub(),
        UserCommand::FetchAll,
        Duration::from_millis(800),
    )
    .await;

    assert!(matches!(message, UsersMessage::UsersLoaded(Ok(ref users)) if users.len() == 5));
    assert!(started.elapsed() >= Duration::from_millis(800));
}

#[tokio::test(start_paused = true)]
async fn zero_min_spinner_returns_immediately() {
    let started = Instant::now();

    let _ = execute_user_command(stub(), UserCommand::FetchAll, Duration::ZERO)
        .await;

    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn create_completion_carries_backend_message() {
    let message = execute_user_command(
        stub(),
        UserCommand::Create(UserPayload::new("Linus", "linus", Role::Client)),
        Duration::ZERO,
    )
    .await;

    assert!(matches!(
        message,
        UsersMessage::SubmitCompleted(Ok(SubmitOutcome::Created { message: Some(ref m) }))
            if m == "User added successfully"
    ));
}

#[tokio::test]
async fn delete_completion_echoes_id() {
    let message = execute_user_command(
        stub(),
        UserCommand::Delete(UserId::from(2u64)),
        Duration::ZERO,
    )
    .await;

    assert!(matches!(
        message,
        UsersMessage::DeleteCompleted(Ok(ref id)) if *id == UserId::from(2u64)
    ));
}

#[tokio::test]
async fn errors_are_stringified() {
    let directory: Arc<dyn UserDirectory> =
        Arc::new(UnreachableDirectory::new("no route to host"));

    let message = execute_user_command(
        directory,
        UserCommand::Update {
            id: UserId::from(1u64),
            payload: UserPayload::new("A", "a", Role::Admin),
        },
        Duration::ZERO,
    )
    .await;

    assert!(matches!(
        message,
        UsersMessage::SubmitCompleted(Err(ref e)) if e == "no route to host"
    ));
}
