//! Checker results in the monitoring-plugin convention: one status, one
//! message, one line of output and an exit code derived from the status.

use std::fmt;

/// Severity of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    pub name: String,
    pub status: Status,
    pub message: String,
}

impl Checker {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            status,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Status::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

/// Renders as `NAME STATUS: message`, or `STATUS: message` when unnamed.
impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}: {}", self.status, self.message)
        } else {
            write!(f, "{} {}: {}", self.name, self.status, self.message)
        }
    }
}
