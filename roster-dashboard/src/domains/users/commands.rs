//! Backend work requested by the users reducer

use std::sync::Arc;
use std::time::Duration;

use roster_model::{UserId, UserPayload};

use super::messages::{SubmitOutcome, UsersMessage};
use crate::infra::services::UserDirectory;

/// A backend request produced by [`super::update_users`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    FetchAll,
    Create(UserPayload),
    Update { id: UserId, payload: UserPayload },
    Delete(UserId),
}

impl UserCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchAll => "FetchAll",
            Self::Create(_) => "Create",
            Self::Update { .. } => "Update",
            Self::Delete(_) => "Delete",
        }
    }
}

/// Run one command and produce its completion message.
///
/// The completion is held back until `min_spinner` has elapsed since
/// dispatch; a zero duration returns as soon as the request does.
pub async fn execute_user_command(
    directory: Arc<dyn UserDirectory>,
    command: UserCommand,
    min_spinner: Duration,
) -> UsersMessage {
    let started = tokio::time::Instant::now();
    let name = command.name();

    let message = match command {
        UserCommand::FetchAll => UsersMessage::UsersLoaded(
            directory.list_users().await.map_err(|e| e.to_string()),
        ),
        UserCommand::Create(payload) => UsersMessage::SubmitCompleted(
            directory
                .create_user(&payload)
                .await
                .map(|response| SubmitOutcome::Created {
                    message: response.message,
                })
                .map_err(|e| e.to_string()),
        ),
        UserCommand::Update { id, payload } => UsersMessage::SubmitCompleted(
            directory
                .update_user(&id, &payload)
                .await
                .map(|()| SubmitOutcome::Updated)
                .map_err(|e| e.to_string()),
        ),
        UserCommand::Delete(id) => UsersMessage::DeleteCompleted(
            directory
                .delete_user(&id)
                .await
                .map(|()| id)
                .map_err(|e| e.to_string()),
        ),
    };

    let elapsed = started.elapsed();
    if elapsed < min_spinner {
        tokio::time::sleep(min_spinner - elapsed).await;
    }

    log::info!(
        "[Users] {} finished in {:?}: {:?}",
        name,
        started.elapsed(),
        message
    );

    message
}
