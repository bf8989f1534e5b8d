use iced::Task;
use iced::time::Instant;

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdate, DomainUpdateResult,
};
use crate::domains::ui::feedback_ui::{FeedbackMessage, update_feedback_ui};
use crate::domains::users::{execute_user_command, update_users};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::log!(log_level(&message), "[Update] {:?}", message);

    let result = match message {
        DomainMessage::Users(msg) => {
            let update = update_users(&mut state.domains.users.state, msg);
            apply_domain_update(state, update)
        }
        DomainMessage::Feedback(msg) => update_feedback_ui(state, msg),
    };

    for event in result.events {
        handle_event(state, event);
    }

    result.task
}

/// Toast ticks arrive every 250 ms while toasts are up; keep them out of debug
fn log_level(message: &DomainMessage) -> log::Level {
    match message {
        DomainMessage::Feedback(FeedbackMessage::Tick(_)) => log::Level::Trace,
        _ => log::Level::Debug,
    }
}

/// Turn a pure domain update into runtime work
fn apply_domain_update(
    state: &State,
    update: DomainUpdate,
) -> DomainUpdateResult {
    let tasks: Vec<Task<DomainMessage>> = update
        .commands
        .into_iter()
        .map(|command| {
            log::debug!("[Update] Dispatching {}", command.name());
            Task::perform(
                execute_user_command(
                    state.user_directory.clone(),
                    command,
                    state.min_spinner,
                ),
                DomainMessage::Users,
            )
        })
        .collect();

    DomainUpdateResult {
        task: Task::batch(tasks),
        events: update.events,
    }
}

fn handle_event(state: &mut State, event: CrossDomainEvent) {
    match event {
        CrossDomainEvent::Notify(level, message) => {
            state
                .domains
                .ui
                .state
                .toast_manager
                .push(level, message, Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::users::UsersMessage;

    #[test]
    fn ticks_log_below_debug() {
        let tick = DomainMessage::from(FeedbackMessage::Tick(Instant::now()));
        assert_eq!(log_level(&tick), log::Level::Trace);
        assert_eq!(
            log_level(&UsersMessage::LoadUsers.into()),
            log::Level::Debug
        );
    }
}
