// High-level command handlers shared by any frontend (TUI today).
// These return structured data instead of formatted strings.

pub mod auth;
pub mod benefit;
pub mod profile;
pub mod wallet;

/// Result type that can include both data and warnings
#[derive(Debug)]
pub struct CommandResult<T> {
    pub data: T,
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            warnings: vec![],
        }
    }

    pub fn with_warnings(data: T, warnings: Vec<String>) -> Self {
        Self { data, warnings }
    }
}

/// Common error type for command operations
#[derive(Debug)]
pub enum CommandError {
    /// Transport-level failure before any HTTP status was received.
    HttpError(String),
    /// Non-success HTTP status; carries the user-facing detail text.
    ApiError(String),
    InvalidInput(String),
    DataError(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            CommandError::ApiError(msg) => write!(f, "{}", msg),
            CommandError::InvalidInput(msg) => write!(f, "{}", msg),
            CommandError::DataError(msg) => write!(f, "Data error: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}
