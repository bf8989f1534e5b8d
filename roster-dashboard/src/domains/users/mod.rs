//! User management domain
//!
//! Owns the cached user list, the add/edit form and the loading counter.
//! Updates are pure: [`update::update_users`] mutates [`UsersState`] and
//! answers with the backend [`UserCommand`]s to run, which the root update
//! hands to [`commands::execute_user_command`].

pub mod commands;
pub mod messages;
pub mod state;
pub mod update;

pub use commands::{UserCommand, execute_user_command};
pub use messages::{SubmitOutcome, UsersMessage};
pub use state::{FormMode, UserFormState, UsersState, ViewMode};
pub use update::update_users;

/// User management domain wrapper
#[derive(Debug, Default)]
pub struct UsersDomain {
    pub state: UsersState,
}
