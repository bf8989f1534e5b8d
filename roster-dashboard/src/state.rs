use std::sync::Arc;
use std::time::Duration;

use crate::app::AppConfig;
use crate::domains::Domains;
use crate::domains::ui::{UiDomain, UiState};
use crate::domains::users::UsersDomain;
use crate::infra::services::UserDirectory;

/// Root application state
pub struct State {
    pub server_url: Arc<str>,
    /// Shortest time the loading overlay stays up per request
    pub min_spinner: Duration,
    pub domains: Domains,
    pub user_directory: Arc<dyn UserDirectory>,
}

impl State {
    pub fn new(config: &AppConfig, user_directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            server_url: Arc::clone(&config.server_url),
            min_spinner: config.min_spinner,
            domains: Domains {
                users: UsersDomain::default(),
                ui: UiDomain::new(UiState::new(config.toast_ttl)),
            },
            user_directory,
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("server_url", &self.server_url)
            .field("min_spinner", &self.min_spinner)
            .field("domains", &self.domains)
            .finish_non_exhaustive()
    }
}
