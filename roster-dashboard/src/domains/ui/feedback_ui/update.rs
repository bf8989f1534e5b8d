use iced::Task;

use crate::{
    common::messages::DomainUpdateResult,
    domains::ui::feedback_ui::FeedbackMessage, state::State,
};

pub fn update_feedback_ui(
    state: &mut State,
    message: FeedbackMessage,
) -> DomainUpdateResult {
    let toasts = &mut state.domains.ui.state.toast_manager;

    match message {
        FeedbackMessage::DismissToast(id) => {
            toasts.dismiss(id);
            DomainUpdateResult::task(Task::none())
        }
        FeedbackMessage::Tick(now) => {
            toasts.expire(now);
            DomainUpdateResult::task(Task::none())
        }
    }
}
