//! UI domain: toasts, theme, view models and widgets

pub mod feedback_ui;
pub mod theme;
pub mod view_models;
pub mod views;

use std::time::Duration;

use feedback_ui::ToastManager;

/// UI domain state
#[derive(Debug, Default)]
pub struct UiState {
    pub toast_manager: ToastManager,
}

impl UiState {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            toast_manager: ToastManager::new(toast_ttl),
        }
    }
}

/// UI domain wrapper
#[derive(Debug, Default)]
pub struct UiDomain {
    pub state: UiState,
}

impl UiDomain {
    pub fn new(state: UiState) -> Self {
        Self { state }
    }
}
