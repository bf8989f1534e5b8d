//! Users domain state

use roster_model::{Role, User, UserId, UserPayload};

/// Which form the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    /// Editing the user with this id
    Edit(UserId),
}

/// Top-level screen mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Listing,
    Form(FormMode),
}

impl ViewMode {
    pub fn is_listing(&self) -> bool {
        matches!(self, ViewMode::Listing)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, ViewMode::Form(FormMode::Add))
    }
}

/// State for the add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub full_name: String,
    pub user_name: String,
    pub role: Option<Role>,
}

impl UserFormState {
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            user_name: user.user_name.clone(),
            // Rows holding a role outside the known set open unselected
            role: user.role.known(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.user_name.is_empty() && self.role.is_none()
    }

    /// Request body for the current fields, or `None` if any is missing.
    ///
    /// Values are sent exactly as typed; blank-only text counts as missing.
    pub fn to_payload(&self) -> Option<UserPayload> {
        if self.full_name.trim().is_empty() || self.user_name.trim().is_empty() {
            return None;
        }

        Some(UserPayload::new(
            self.full_name.clone(),
            self.user_name.clone(),
            self.role?,
        ))
    }
}

/// Users management state
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    /// Last list fetched from the backend
    pub users: Vec<User>,
    /// Form fields (add or edit)
    pub form: UserFormState,
    pub mode: ViewMode,
    /// Requests dispatched and not yet completed
    pub in_flight: usize,
}

impl UsersState {
    /// Whether the loading overlay should be shown
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.user_id == user_id)
    }

    /// Back to the list with an empty form
    pub fn reset_to_listing(&mut self) {
        self.form = UserFormState::default();
        self.mode = ViewMode::Listing;
    }
}
