use serde::{Deserialize, Serialize};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    ConfirmationError,
    ConfigError,
    SerializationError,
    IoError,
    InternalError,
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Info,
    Debug,
}

/// Result of asking the coordinator to append the factory's candidate model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    /// The candidate was appended at `position`.
    Added { position: usize },
    /// The factory reported the candidate invalid; nothing changed.
    Rejected,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

/// Answer returned by the confirmation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationOutcome {
    Confirmed,
    Cancelled,
}

impl ConfirmationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationOutcome::Confirmed => "confirmed",
            ConfirmationOutcome::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ConfirmationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
