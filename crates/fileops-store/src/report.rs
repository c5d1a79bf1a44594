//! Human-readable status lines for store operations
//!
//! Each store operation emits one tagged line describing its outcome. The
//! lines are meant for an operator watching a script run; callers make
//! decisions from the returned `Result`, never from these lines.

use std::fmt;
use std::sync::Mutex;

/// Tag attached to a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the status line of every store operation.
pub trait Reporter: Send + Sync {
    fn report(&self, status: Status, message: &str);
}

/// Prints `[STATUS]: message` to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, status: Status, message: &str) {
        println!("[{}]: {}", status, message);
    }
}

/// Discards every status line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _status: Status, _message: &str) {}
}

/// Keeps status lines in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(Status, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, oldest first.
    pub fn lines(&self) -> Vec<(Status, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Lines rendered the way [`StdoutReporter`] prints them.
    pub fn rendered(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|(status, message)| format!("[{}]: {}", status, message))
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, status: Status, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((status, message.to_string()));
        }
    }
}
