use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Invalid sessions: {0}")]
    InvalidSessions(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
    #[error("Element not found: #{0}")]
    MissingElement(String),
    #[error("Session {id} ends before it starts")]
    InvalidTimeRange { id: String },
}

pub type Result<T> = std::result::Result<T, AgendaError>;
