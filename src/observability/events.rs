//! Observable events
//!
//! Every log line the service writes names one of these.

use std::fmt;

use super::logger::Severity;

/// Observable events in the records service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    BootStart,
    ConfigLoaded,
    /// Listener bound, ready for requests
    ServerListening,
    ShutdownStart,
    ShutdownComplete,
    /// Server could not start or stopped with an error
    ServerFailed,

    // Records
    StudentCreated,
    StudentUpdated,
    StudentRemoved,
    /// A request named an id the store does not hold
    StudentNotFound,
    /// Create (or update, when configured) rejected before reaching the store
    ValidationRejected,
    /// Store lock poisoned
    StoreUnavailable,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "ALUNOS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "ALUNOS_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",

            Event::StudentCreated => "STUDENT_CREATED",
            Event::StudentUpdated => "STUDENT_UPDATED",
            Event::StudentRemoved => "STUDENT_REMOVED",
            Event::StudentNotFound => "STUDENT_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::StoreUnavailable => "STORE_UNAVAILABLE",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StudentNotFound | Event::ValidationRejected => Severity::Warn,
            Event::StoreUnavailable => Severity::Error,
            Event::ServerFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StudentCreated.as_str(), "STUDENT_CREATED");
        assert_eq!(Event::ServerListening.to_string(), "ALUNOS_SERVING");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::StudentCreated.severity(), Severity::Info);
        assert_eq!(Event::ValidationRejected.severity(), Severity::Warn);
        assert_eq!(Event::StoreUnavailable.severity(), Severity::Error);
        assert_eq!(Event::ServerFailed.severity(), Severity::Fatal);
    }
}
