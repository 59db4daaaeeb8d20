use std::time::{Duration, Instant};

use etq_model::Severity;

/// How long a danger notice stays visible.
pub const DANGER_TIMEOUT: Duration = Duration::from_millis(3000);
/// How long success and info notices stay visible.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// One live transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

/// Holder for the single transient notification.
///
/// Expiry is evaluated against the monotonic clock at read time. A newer
/// notice replaces the stored deadline, so an older pending expiry can never
/// clear a newer message; no timer callbacks are involved. The `*_at`
/// variants take an explicit instant for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notice>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any current notice and restarting its clock.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notify_at(Instant::now(), message, severity);
    }

    /// Clock-explicit variant of [`notify`](Self::notify).
    pub fn notify_at(&mut self, now: Instant, message: impl Into<String>, severity: Severity) {
        let timeout = match severity {
            Severity::Danger => DANGER_TIMEOUT,
            Severity::Success | Severity::Info => DEFAULT_TIMEOUT,
        };
        self.current = Some(Notice {
            message: message.into(),
            severity,
            expires_at: now + timeout,
        });
    }

    /// The live notice, if its deadline has not passed.
    pub fn active(&self) -> Option<&Notice> {
        self.active_at(Instant::now())
    }

    /// Clock-explicit variant of [`active`](Self::active).
    pub fn active_at(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|notice| now < notice.expires_at)
    }

    /// Drop the notice once its deadline has passed. The UIs call this once
    /// per frame so an expired message also releases its storage.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.current
            && now >= notice.expires_at
        {
            self.current = None;
        }
    }

    /// Clear immediately, without waiting for the deadline.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
