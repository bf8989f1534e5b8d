use crate::{Role, UserId, UserRole};

/// A user record as served by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct User {
    pub user_id: UserId,
    pub full_name: String,
    pub user_name: String,
    #[cfg_attr(feature = "serde", serde(default = "unrecognized_role"))]
    pub role: UserRole,
}

#[cfg(feature = "serde")]
fn unrecognized_role() -> UserRole {
    UserRole::Unrecognized(String::new())
}

/// Editable user fields, sent as the body of create and update requests.
///
/// Carries no id: the backend assigns one on create and takes it from the
/// request path on update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserPayload {
    pub full_name: String,
    pub user_name: String,
    pub role: Role,
}

impl UserPayload {
    pub fn new(
        full_name: impl Into<String>,
        user_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            user_name: user_name.into(),
            role,
        }
    }
}
