//! Plain data derived from [`UsersState`] for the views
//!
//! Views only lay these out, so what the screen shows can be asserted
//! without building widgets.

use roster_model::UserId;

use crate::domains::users::{FormMode, UsersState, ViewMode};

pub const EMPTY_TABLE_TEXT: &str = "No users found";
pub const TABLE_COLUMNS: [&str; 5] =
    ["#", "Full Name", "User Name", "Role", "Actions"];

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    User {
        /// 1-based position in the list
        index: usize,
        user_id: UserId,
        full_name: String,
        user_name: String,
        role: String,
    },
    /// Placeholder row spanning every column
    Empty,
}

pub fn table_rows(state: &UsersState) -> Vec<TableRow> {
    if state.users.is_empty() {
        return vec![TableRow::Empty];
    }

    state
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| TableRow::User {
            index: i + 1,
            user_id: user.user_id.clone(),
            full_name: user.full_name.clone(),
            user_name: user.user_name.clone(),
            role: user.role.to_string(),
        })
        .collect()
}

pub fn header_action_label(mode: &ViewMode) -> &'static str {
    match mode {
        ViewMode::Listing => "Add user",
        ViewMode::Form(_) => "Back to list",
    }
}

pub fn form_title(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Add => "Add User",
        FormMode::Edit(_) => "Edit User",
    }
}

pub fn submit_label(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Add => "Add",
        FormMode::Edit(_) => "Update",
    }
}
