//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::FeedbackMessage;
use crate::state::State;

const TOAST_TICK: Duration = Duration::from_millis(250);

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    // Only tick while something can expire
    if state.domains.ui.state.toast_manager.has_toasts() {
        iced::time::every(TOAST_TICK)
            .map(|now| DomainMessage::Feedback(FeedbackMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
