//! Notifications emitted by the alarm panel and the sinks that consume them.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Observable outcome of an alarm operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    CodeAccepted,
    InvalidCode,
    SystemDisarmed,
    SystemArmed,
    AlarmSounded,
    AlarmStopped,
    AdministratorInformed,
}

impl Notice {
    /// Human-readable text for this notice.
    pub fn message(&self) -> &'static str {
        match self {
            Self::CodeAccepted => "Code accepted",
            Self::InvalidCode => "Invalid code",
            Self::SystemDisarmed => "System disarmed",
            Self::SystemArmed => "System armed",
            Self::AlarmSounded => "Alarm sounded",
            Self::AlarmStopped => "Alarm stopped",
            Self::AdministratorInformed => "Administrator informed",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Destination for notices. The panel never decides how they are shown.
pub trait NotificationSink: Send {
    /// Deliver one notice.
    fn notify(&mut self, notice: Notice);
}

/// Sink that logs every notice at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notice: Notice) {
        tracing::info!(notice = ?notice, "{}", notice);
    }
}

/// A notice stamped with the time it was emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub at: DateTime<Utc>,
    pub notice: Notice,
}

/// In-memory sink. Clones share the same buffer, so a caller can keep one
/// handle while the panel owns another.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl Recorder {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamped entries in emission order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().clone()
    }

    /// Notices in emission order, without timestamps.
    pub fn notices(&self) -> Vec<Notice> {
        self.entries.lock().iter().map(|e| e.notice).collect()
    }

    /// Messages in emission order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.entries.lock().iter().map(|e| e.notice.message()).collect()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Notice> {
        self.entries.lock().drain(..).map(|e| e.notice).collect()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl NotificationSink for Recorder {
    fn notify(&mut self, notice: Notice) {
        self.entries.lock().push(Entry {
            at: Utc::now(),
            notice,
        });
    }
}
