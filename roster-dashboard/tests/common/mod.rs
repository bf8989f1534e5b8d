//! Test harness for driving the users domain end to end
//!
//! Messages go through the pure reducer; every command it asks for is run
//! against a [`StubUserDirectory`] and the completion is fed back in, until
//! nothing is left to do.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use roster_dashboard::common::messages::CrossDomainEvent;
use roster_dashboard::domains::ui::feedback_ui::ToastLevel;
use roster_dashboard::domains::users::{
    UserCommand, UsersMessage, UsersState, execute_user_command, update_users,
};
use roster_dashboard::infra::services::UserDirectory;
use roster_dashboard::infra::testing::StubUserDirectory;
use roster_model::{Role, User, UserId};

pub struct Harness {
    pub state: UsersState,
    pub directory: StubUserDirectory,
    /// Every command the reducer issued, in order
    pub commands: Vec<UserCommand>,
    /// Every notification the reducer raised, in order
    pub events: Vec<CrossDomainEvent>,
}

impl Harness {
    pub fn new(directory: StubUserDirectory) -> Self {
        Self {
            state: UsersState::default(),
            directory,
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Harness whose list has already been loaded once
    pub async fn loaded(users: Vec<User>) -> Self {
        let mut harness = Self::new(StubUserDirectory::with_users(users));
        harness.send(UsersMessage::LoadUsers).await;
        harness.clear_history();
        harness
    }

    /// Dispatch `message` and run the resulting commands to completion
    pub async fn send(&mut self, message: UsersMessage) {
        let directory: Arc<dyn UserDirectory> = Arc::new(self.directory.clone());
        let mut queue = VecDeque::from([message]);

        while let Some(message) = queue.pop_front() {
            let update = update_users(&mut self.state, message);
            self.events.extend(update.events);

            for command in update.commands {
                self.commands.push(command.clone());
                let reply =
                    execute_user_command(directory.clone(), command, Duration::ZERO)
                        .await;
                queue.push_back(reply);
            }
        }
    }

    /// Forget recorded commands, events and directory calls
    pub fn clear_history(&mut self) {
        self.commands.clear();
        self.events.clear();
        self.directory.clear_calls();
    }

    pub fn last_notification(&self) -> Option<(ToastLevel, &str)> {
        self.events.last().map(|event| match event {
            CrossDomainEvent::Notify(level, message) => (*level, message.as_str()),
        })
    }
}

pub fn user(id: u64, full_name: &str, user_name: &str, role: Role) -> User {
    User {
        user_id: UserId::from(id),
        full_name: full_name.to_string(),
        user_name: user_name.to_string(),
        role: role.into(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Ada Lovelace", "ada", Role::Ceo),
        user(2, "Alan Turing", "alan", Role::Operative),
        user(3, "Grace Hopper", "grace", Role::Admin),
    ]
}
