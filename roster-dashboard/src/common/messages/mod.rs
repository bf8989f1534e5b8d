use iced::Task;

use crate::domains::ui::feedback_ui::{FeedbackMessage, ToastLevel};
use crate::domains::users::{UserCommand, UsersMessage};

/// Result of a pure domain update.
///
/// Holds data only: backend commands to execute and cross-domain events to
/// broadcast. The root update turns it into runtime tasks, which keeps the
/// domain reducers testable without an iced runtime.
#[derive(Debug, Default, PartialEq)]
pub struct DomainUpdate {
    /// Backend work requested by the domain
    pub commands: Vec<UserCommand>,
    /// Cross-domain events to be broadcast to all domains
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdate {
    /// Create an empty update (no commands or events)
    pub fn none() -> Self {
        Self::default()
    }

    /// Create an update with a single command
    pub fn command(command: UserCommand) -> Self {
        Self {
            commands: vec![command],
            events: Vec::new(),
        }
    }

    /// Create an update with a single event
    pub fn event(event: CrossDomainEvent) -> Self {
        Self {
            commands: Vec::new(),
            events: vec![event],
        }
    }

    /// Add an event to this update
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Check if this update contains any commands or events
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }
}

/// Result of a domain update that already carries a runtime task
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Users list and form
    Users(UsersMessage),

    /// Toasts and other transient feedback
    Feedback(FeedbackMessage),
}

impl From<UsersMessage> for DomainMessage {
    fn from(msg: UsersMessage) -> Self {
        DomainMessage::Users(msg)
    }
}

impl From<FeedbackMessage> for DomainMessage {
    fn from(msg: FeedbackMessage) -> Self {
        DomainMessage::Feedback(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users(msg) => msg.name(),
            Self::Feedback(msg) => msg.name(),
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Users(msg) => write!(f, "DomainMessage::Users({:?})", msg),
            Self::Feedback(msg) => {
                write!(f, "DomainMessage::Feedback({:?})", msg)
            }
        }
    }
}

/// Cross-domain event bus for coordination
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// Show a toast notification
    Notify(ToastLevel, String),
}

impl CrossDomainEvent {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify(ToastLevel::Success, message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Notify(ToastLevel::Warning, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify(ToastLevel::Error, message.into())
    }
}
