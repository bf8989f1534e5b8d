//! Transient toast notifications

use std::collections::VecDeque;
use std::time::Duration;

use iced::time::Instant;

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(4);
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Keeps the visible toasts, newest last
#[derive(Debug)]
pub struct ToastManager {
    pub toasts: VecDeque<Toast>,
    ttl: Duration,
    next_id: u64,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            next_id: 0,
        }
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Show a toast; drops the oldest once more than [`MAX_TOASTS`] are visible
    pub fn push(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            level,
            message: message.into(),
            created_at: now,
        });

        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }

        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop every toast older than the TTL
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_past_capacity() {
        let mut manager = ToastManager::default();
        let now = Instant::now();

        let first = manager.push(ToastLevel::Success, "first", now);
        for i in 0..MAX_TOASTS {
            manager.push(ToastLevel::Error, format!("toast {i}"), now);
        }

        assert_eq!(manager.toasts.len(), MAX_TOASTS);
        assert!(manager.toasts.iter().all(|toast| toast.id != first));
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let mut manager = ToastManager::new(Duration::from_secs(4));
        let start = Instant::now();

        manager.push(ToastLevel::Success, "saved", start);
        manager.push(
            ToastLevel::Error,
            "failed",
            start + Duration::from_secs(2),
        );

        manager.expire(start + Duration::from_secs(3));
        assert_eq!(manager.toasts.len(), 2);

        manager.expire(start + Duration::from_secs(4));
        assert_eq!(manager.toasts.len(), 1);
        assert_eq!(manager.toasts[0].message, "failed");

        manager.expire(start + Duration::from_secs(6));
        assert!(!manager.has_toasts());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut manager = ToastManager::default();
        let now = Instant::now();
        let keep = manager.push(ToastLevel::Warning, "keep", now);
        let drop = manager.push(ToastLevel::Success, "drop", now);

        manager.dismiss(drop);

        assert_eq!(manager.toasts.len(), 1);
        assert_eq!(manager.toasts[0].id, keep);
    }
}
