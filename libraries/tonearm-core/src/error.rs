/// Core error types for Tonearm
use thiserror::Error;

/// Result type alias using `TonearmError`
pub type Result<T> = std::result::Result<T, TonearmError>;

/// Error taxonomy shared by the session layer
///
/// Every variant maps to exactly one spoken response; none of them is
/// allowed to escape a voice turn as a crash.
#[derive(Error, Debug)]
pub enum TonearmError {
    /// Query resolved to nothing
    #[error("{entity} not found: {query}")]
    NotFound { entity: String, query: String },

    /// Navigation on an empty queue
    #[error("Queue is empty")]
    EmptyQueue,

    /// Catalog unreachable or answered with a transport-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Catalog rejected our credentials
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Intent name the interpreter does not know
    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TonearmError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, query: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            query: query.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
