use roster_model::{Role, User, UserId};

use super::commands::UserCommand;
use super::messages::{SubmitOutcome, UsersMessage};
use super::state::{FormMode, UserFormState, UsersState, ViewMode};
use crate::common::messages::{CrossDomainEvent, DomainUpdate};
use crate::infra::services::user_directory::GENERIC_SUBMIT_FAILURE;

pub const FIELDS_REQUIRED: &str = "All fields are required.";
pub const FETCH_FAILED: &str = "Failed to fetch users.";
pub const CREATED_FALLBACK: &str = "User created successfully !!";
pub const UPDATED: &str = "User updated successfully !!";
pub const DELETED: &str = "User Deleted Successfully !!";
pub const DELETE_FAILED: &str = "Failed to delete user";
pub const ROLE_UNRECOGNIZED: &str =
    "This user has no recognized role. Pick one before saving.";

/// Handle users domain messages.
///
/// Mutates `state` and returns the backend commands and notifications the
/// transition asks for; nothing here touches the network.
pub fn update_users(
    state: &mut UsersState,
    message: UsersMessage,
) -> DomainUpdate {
    match message {
        UsersMessage::LoadUsers => handle_load_users(state),
        UsersMessage::UsersLoaded(result) => handle_users_loaded(state, result),
        UsersMessage::ToggleAddMode => handle_toggle_add_mode(state),
        UsersMessage::BeginEdit(user_id) => handle_begin_edit(state, user_id),
        UsersMessage::FullNameChanged(value) => {
            state.form.full_name = value;
            DomainUpdate::none()
        }
        UsersMessage::UserNameChanged(value) => {
            state.form.user_name = value;
            DomainUpdate::none()
        }
        UsersMessage::RoleSelected(role) => handle_role_selected(state, role),
        UsersMessage::SubmitForm => handle_submit_form(state),
        UsersMessage::SubmitCompleted(result) => {
            handle_submit_completed(state, result)
        }
        UsersMessage::DeleteUser(user_id) => {
            state.begin_request();
            DomainUpdate::command(UserCommand::Delete(user_id))
        }
        UsersMessage::DeleteCompleted(result) => {
            handle_delete_completed(state, result)
        }
    }
}

fn handle_load_users(state: &mut UsersState) -> DomainUpdate {
    state.begin_request();
    DomainUpdate::command(UserCommand::FetchAll)
}

fn handle_users_loaded(
    state: &mut UsersState,
    result: Result<Vec<User>, String>,
) -> DomainUpdate {
    state.end_request();

    match result {
        Ok(users) => {
            log::info!("[Users] Loaded {} users", users.len());
            state.users = users;
            DomainUpdate::none()
        }
        Err(e) => {
            log::error!("[Users] Failed to load users: {}", e);
            DomainUpdate::event(CrossDomainEvent::error(FETCH_FAILED))
        }
    }
}

fn handle_toggle_add_mode(state: &mut UsersState) -> DomainUpdate {
    state.form = UserFormState::default();
    state.mode = match state.mode {
        ViewMode::Listing => ViewMode::Form(FormMode::Add),
        ViewMode::Form(_) => ViewMode::Listing,
    };
    DomainUpdate::none()
}

fn handle_begin_edit(state: &mut UsersState, user_id: UserId) -> DomainUpdate {
    let Some(user) = state.user(&user_id) else {
        log::warn!("[Users] Edit requested for unknown user {}", user_id);
        return DomainUpdate::none();
    };

    let update = match user.role.known() {
        Some(_) => DomainUpdate::none(),
        None => {
            log::warn!(
                "[Users] User {} has unrecognized role {:?}",
                user_id,
                user.role.as_str()
            );
            DomainUpdate::event(CrossDomainEvent::warning(ROLE_UNRECOGNIZED))
        }
    };

    state.form = UserFormState::from_user(user);
    state.mode = ViewMode::Form(FormMode::Edit(user_id));
    update
}

fn handle_role_selected(state: &mut UsersState, role: Role) -> DomainUpdate {
    state.form.role = Some(role);
    DomainUpdate::none()
}

fn handle_submit_form(state: &mut UsersState) -> DomainUpdate {
    let ViewMode::Form(mode) = &state.mode else {
        log::warn!("[Users] Submit ignored outside of the form");
        return DomainUpdate::none();
    };

    let Some(payload) = state.form.to_payload() else {
        return DomainUpdate::event(CrossDomainEvent::error(FIELDS_REQUIRED));
    };

    let command = match mode {
        FormMode::Add => UserCommand::Create(payload),
        FormMode::Edit(id) => UserCommand::Update {
            id: id.clone(),
            payload,
        },
    };

    state.begin_request();
    DomainUpdate::command(command)
}

fn handle_submit_completed(
    state: &mut UsersState,
    result: Result<SubmitOutcome, String>,
) -> DomainUpdate {
    state.end_request();

    match result {
        Ok(outcome) => {
            let notice = match outcome {
                SubmitOutcome::Created { message } => message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| CREATED_FALLBACK.to_string()),
                SubmitOutcome::Updated => UPDATED.to_string(),
            };

            state.reset_to_listing();
            state.begin_request();
            DomainUpdate::command(UserCommand::FetchAll)
                .add_event(CrossDomainEvent::success(notice))
        }
        Err(e) => {
            log::error!("[Users] Submit failed: {}", e);
            let notice = if e.trim().is_empty() {
                GENERIC_SUBMIT_FAILURE.to_string()
            } else {
                e
            };
            DomainUpdate::event(CrossDomainEvent::error(notice))
        }
    }
}

fn handle_delete_completed(
    state: &mut UsersState,
    result: Result<UserId, String>,
) -> DomainUpdate {
    state.end_request();

    match result {
        Ok(user_id) => {
            log::info!("[Users] Deleted user {}", user_id);
            state.begin_request();
            DomainUpdate::command(UserCommand::FetchAll)
                .add_event(CrossDomainEvent::success(DELETED))
        }
        Err(e) => {
            log::error!("[Users] Delete failed: {}", e);
            DomainUpdate::event(CrossDomainEvent::error(DELETE_FAILED))
        }
    }
}
