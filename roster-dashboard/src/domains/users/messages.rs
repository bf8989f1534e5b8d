use roster_model::{Role, User, UserId};

/// What a successful submit did on the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// User created; carries the backend's confirmation message, if any
    Created { message: Option<String> },
    Updated,
}

#[derive(Clone)]
pub enum UsersMessage {
    // Listing
    LoadUsers,
    UsersLoaded(Result<Vec<User>, String>),

    // Mode switches
    ToggleAddMode,
    BeginEdit(UserId),

    // Form fields
    FullNameChanged(String),
    UserNameChanged(String),
    RoleSelected(Role),

    // Submit
    SubmitForm,
    SubmitCompleted(Result<SubmitOutcome, String>),

    // Delete
    DeleteUser(UserId),
    DeleteCompleted(Result<UserId, String>),
}

impl UsersMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "Users::LoadUsers",
            Self::UsersLoaded(_) => "Users::UsersLoaded",
            Self::ToggleAddMode => "Users::ToggleAddMode",
            Self::BeginEdit(_) => "Users::BeginEdit",
            Self::FullNameChanged(_) => "Users::FullNameChanged",
            Self::UserNameChanged(_) => "Users::UserNameChanged",
            Self::RoleSelected(_) => "Users::RoleSelected",
            Self::SubmitForm => "Users::SubmitForm",
            Self::SubmitCompleted(_) => "Users::SubmitCompleted",
            Self::DeleteUser(_) => "Users::DeleteUser",
            Self::DeleteCompleted(_) => "Users::DeleteCompleted",
        }
    }
}

impl std::fmt::Debug for UsersMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsersLoaded(Ok(users)) => {
                write!(f, "Users::UsersLoaded(Ok({} users))", users.len())
            }
            Self::UsersLoaded(Err(e)) => {
                write!(f, "Users::UsersLoaded(Err({}))", e)
            }
            Self::BeginEdit(id) => write!(f, "Users::BeginEdit({})", id),
            Self::FullNameChanged(value) => {
                write!(f, "Users::FullNameChanged({:?})", value)
            }
            Self::UserNameChanged(value) => {
                write!(f, "Users::UserNameChanged({:?})", value)
            }
            Self::RoleSelected(role) => {
                write!(f, "Users::RoleSelected({})", role)
            }
            Self::SubmitCompleted(result) => {
                write!(f, "Users::SubmitCompleted({:?})", result)
            }
            Self::DeleteUser(id) => write!(f, "Users::DeleteUser({})", id),
            Self::DeleteCompleted(result) => {
                write!(f, "Users::DeleteCompleted({:?})", result)
            }
            _ => f.write_str(self.name()),
        }
    }
}
