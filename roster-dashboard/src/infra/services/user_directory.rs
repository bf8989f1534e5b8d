use async_trait::async_trait;
use roster_model::routes::{users, utils};
use roster_model::{CreateUserResponse, User, UserId, UserPayload};
use std::sync::Arc;

use crate::infra::api_client::{ApiClient, ApiError, ApiResult};

/// Fallback text when the backend refuses a create without saying why
pub const GENERIC_SUBMIT_FAILURE: &str = "Failed to submit user.";

/// User persistence as seen by the dashboard
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Full user list
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// Create a user. An `Ok` reply is always an accepted one.
    async fn create_user(
        &self,
        payload: &UserPayload,
    ) -> ApiResult<CreateUserResponse>;

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: &UserPayload,
    ) -> ApiResult<()>;

    async fn delete_user(&self, user_id: &UserId) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub struct UserDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl UserDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn item_path(route: &str, user_id: &UserId) -> String {
        utils::replace_param(
            route,
            users::USER_ID_PARAM,
            urlencoding::encode(user_id.as_str()),
        )
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryApiAdapter {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.client.get(users::LIST).await
    }

    async fn create_user(
        &self,
        payload: &UserPayload,
    ) -> ApiResult<CreateUserResponse> {
        let response: CreateUserResponse =
            self.client.post(users::CREATE, payload).await?;

        if response.accepted {
            Ok(response)
        } else {
            Err(ApiError::Rejected(
                response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string()),
            ))
        }
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: &UserPayload,
    ) -> ApiResult<()> {
        let path = Self::item_path(users::UPDATE, user_id);
        self.client.put(&path, payload).await
    }

    async fn delete_user(&self, user_id: &UserId) -> ApiResult<()> {
        let path = Self::item_path(users::DELETE, user_id);
        self.client.delete(&path).await
    }
}

/// Directory used when no HTTP client could be built (bad server URL).
///
/// Every call fails with the original reason so the problem shows up as a
/// notification instead of taking the dashboard down.
#[derive(Clone, Debug)]
pub struct UnreachableDirectory {
    reason: String,
}

impl UnreachableDirectory {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> ApiResult<T> {
        Err(ApiError::Rejected(self.reason.clone()))
    }
}

#[async_trait]
impl UserDirectory for UnreachableDirectory {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.fail()
    }

    async fn create_user(
        &self,
        _payload: &UserPayload,
    ) -> ApiResult<CreateUserResponse> {
        self.fail()
    }

    async fn update_user(
        &self,
        _user_id: &UserId,
        _payload: &UserPayload,
    ) -> ApiResult<()> {
        self.fail()
    }

    async fn delete_user(&self, _user_id: &UserId) -> ApiResult<()> {
        self.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths_escape_the_id() {
        let id = UserId::new("a b/c");
        assert_eq!(
            UserDirectoryApiAdapter::item_path(users::DELETE, &id),
            "/users/api/deleteUser/a%20b%2Fc"
        );
    }

    #[tokio::test]
    async fn unreachable_directory_reports_its_reason() {
        let directory = UnreachableDirectory::new("Invalid server URL");
        let err = directory.list_users().await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid server URL");
    }
}
