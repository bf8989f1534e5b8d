use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use roster_model::{CreateUserResponse, Role, User, UserId, UserPayload};

use crate::infra::api_client::{ApiError, ApiResult};
use crate::infra::services::UserDirectory;

/// One recorded call against [`StubUserDirectory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    List,
    Create(UserPayload),
    Update(UserId, UserPayload),
    Delete(UserId),
}

/// In-memory [`UserDirectory`] that records every call
#[derive(Debug, Clone)]
pub struct StubUserDirectory {
    inner: Arc<Mutex<InnerDirectory>>,
}

#[derive(Debug, Default)]
struct InnerDirectory {
    users: Vec<User>,
    calls: Vec<DirectoryCall>,
    next_id: u64,
    pending_failures: Vec<String>,
}

impl Default for StubUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl StubUserDirectory {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|user| user.user_id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: Arc::new(Mutex::new(InnerDirectory {
                users,
                calls: Vec::new(),
                next_id,
                pending_failures: Vec::new(),
            })),
        }
    }

    /// A small seeded directory for the offline demo mode
    pub fn with_demo_users() -> Self {
        let seed = [
            ("Grace Hopper", "ghopper", Role::Admin),
            ("Ken Thompson", "ken", Role::Operative),
            ("Margaret Hamilton", "mhamilton", Role::Ceo),
            ("Dennis Ritchie", "dmr", Role::Courier),
            ("Barbara Liskov", "liskov", Role::Client),
        ];

        Self::with_users(
            seed.into_iter()
                .enumerate()
                .map(|(index, (full_name, user_name, role))| User {
                    user_id: UserId::from(index as u64 + 1),
                    full_name: full_name.to_string(),
                    user_name: user_name.to_string(),
                    role: role.into(),
                })
                .collect(),
        )
    }

    /// Make the next call fail with `message`, whatever it is
    pub fn fail_next(&self, message: impl Into<String>) {
        self.inner.lock().pending_failures.push(message.into());
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.lock().users.clone()
    }

    fn record(&self, call: DirectoryCall) -> ApiResult<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);

        if inner.pending_failures.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Rejected(inner.pending_failures.remove(0)))
        }
    }

    fn not_found(user_id: &UserId) -> ApiError {
        ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: format!("User {} not found", user_id),
        }
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.record(DirectoryCall::List)?;
        Ok(self.users())
    }

    async fn create_user(
        &self,
        payload: &UserPayload,
    ) -> ApiResult<CreateUserResponse> {
        self.record(DirectoryCall::Create(payload.clone()))?;

        let mut inner = self.inner.lock();
        let user_id = UserId::from(inner.next_id);
        inner.next_id += 1;
        inner.users.push(User {
            user_id,
            full_name: payload.full_name.clone(),
            user_name: payload.user_name.clone(),
            role: payload.role.into(),
        });

        Ok(CreateUserResponse {
            accepted: true,
            message: Some("User added successfully".to_string()),
        })
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: &UserPayload,
    ) -> ApiResult<()> {
        self.record(DirectoryCall::Update(user_id.clone(), payload.clone()))?;

        let mut inner = self.inner.lock();
        let user = inner
            .users
            .iter_mut()
            .find(|user| &user.user_id == user_id)
            .ok_or_else(|| Self::not_found(user_id))?;

        user.full_name = payload.full_name.clone();
        user.user_name = payload.user_name.clone();
        user.role = payload.role.into();
        Ok(())
    }

    async fn delete_user(&self, user_id: &UserId) -> ApiResult<()> {
        self.record(DirectoryCall::Delete(user_id.clone()))?;

        let mut inner = self.inner.lock();
        let before = inner.users.len();
        inner.users.retain(|user| &user.user_id != user_id);

        if inner.users.len() == before {
            Err(Self::not_found(user_id))
        } else {
            Ok(())
        }
    }
}
