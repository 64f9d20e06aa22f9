//! Transient notifications.
//!
//! Notices stack without limit or de-duplication. Each one lives for a fixed
//! lifetime from the moment it was posted; the DOM view schedules the
//! dismissal and [`NoticeStack::push`] also sweeps anything already past due.

use std::time::Duration;

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn container_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "px-6 py-4 rounded-lg shadow-lg bg-green-500 text-white",
            NoticeKind::Error => "px-6 py-4 rounded-lg shadow-lg bg-red-500 text-white",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "fas fa-check-circle mr-2",
            NoticeKind::Error => "fas fa-exclamation-circle mr-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    /// Milliseconds on the caller's clock.
    pub posted_at_ms: u64,
}

impl Notice {
    /// A notice is shown until exactly `ttl` has passed, and not after.
    pub fn is_live(&self, now_ms: u64, ttl: Duration) -> bool {
        now_ms.saturating_sub(self.posted_at_ms) < ttl.as_millis() as u64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeStack {
    ttl: Duration,
    next_id: u64,
    notices: Vec<Notice>,
}

impl Default for NoticeStack {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 0,
            notices: Vec::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now_ms: u64) -> NoticeId {
        self.retain_live(now_ms);
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
            posted_at_ms: now_ms,
        });
        id
    }

    /// Remove one notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn retain_live(&mut self, now_ms: u64) {
        let ttl = self.ttl;
        self.notices.retain(|n| n.is_live(now_ms, ttl));
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
