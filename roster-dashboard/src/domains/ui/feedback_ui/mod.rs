pub mod toasts;
pub mod update;

use iced::time::Instant;

pub use toasts::{Toast, ToastId, ToastLevel, ToastManager};
pub use update::update_feedback_ui;

#[derive(Clone)]
pub enum FeedbackMessage {
    DismissToast(ToastId),
    /// Periodic tick that expires old toasts
    Tick(Instant),
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DismissToast(_) => "UI::DismissToast",
            Self::Tick(_) => "UI::Tick",
        }
    }
}

impl std::fmt::Debug for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DismissToast(id) => write!(f, "UI::DismissToast({:?})", id),
            Self::Tick(_) => write!(f, "UI::Tick"),
        }
    }
}
