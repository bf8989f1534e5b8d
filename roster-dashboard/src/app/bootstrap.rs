use std::sync::Arc;
use std::time::Duration;

use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::users::UsersMessage;
use crate::infra::api_client::ApiClient;
use crate::infra::config::Config;
use crate::infra::services::{
    UnreachableDirectory, UserDirectory, UserDirectoryApiAdapter,
};
use crate::infra::testing::StubUserDirectory;
use crate::state::State;

pub const ENV_USE_STUBS: &str = "ROSTER_USE_STUBS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_url: Arc<str>,
    pub request_timeout: Duration,
    /// Completion messages are held back until this long after dispatch
    pub min_spinner: Duration,
    pub toast_ttl: Duration,
    /// Serve users from an in-memory directory instead of the backend
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::from_config(&Config {
            server_url: server_url.into(),
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            server_url: Arc::from(config.server_url.as_str()),
            request_timeout: config.request_timeout(),
            min_spinner: Duration::from_millis(config.min_spinner_ms),
            toast_ttl: Duration::from_millis(config.toast_ttl_ms),
            use_test_stubs: false,
        }
    }

    pub fn from_environment() -> Self {
        let env_value = std::env::var(ENV_USE_STUBS).unwrap_or_default();
        let use_test_stubs = matches!(
            env_value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ) || std::env::args().any(|arg| arg == "--demo");

        Self::from_config(&Config::load()).with_test_stubs(use_test_stubs)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }

    pub fn with_min_spinner(mut self, min_spinner: Duration) -> Self {
        self.min_spinner = min_spinner;
        self
    }
}

/// Build the initial state and pick the user directory for `config`.
///
/// A server URL that cannot be parsed does not abort start-up; every
/// request then fails with the parse error instead.
pub fn base_state(config: &AppConfig) -> State {
    let directory: Arc<dyn UserDirectory> = if config.use_test_stubs {
        log::info!("[Bootstrap] Using in-memory user directory");
        Arc::new(StubUserDirectory::with_demo_users())
    } else {
        match ApiClient::new(config.server_url(), config.request_timeout) {
            Ok(client) => {
                log::info!("[Bootstrap] Users backend at {}", client.base_url());
                Arc::new(UserDirectoryApiAdapter::new(Arc::new(client)))
            }
            Err(e) => {
                log::error!("[Bootstrap] {}", e);
                Arc::new(UnreachableDirectory::new(e.to_string()))
            }
        }
    };

    State::new(config, directory)
}

/// Messages dispatched once at start-up
pub fn initial_messages() -> Vec<DomainMessage> {
    vec![DomainMessage::Users(UsersMessage::LoadUsers)]
}

/// Boot logic for the running application, returning the initial state and task batch.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = base_state(config);
    let tasks = initial_messages().into_iter().map(Task::done);

    (state, Task::batch(tasks))
}
