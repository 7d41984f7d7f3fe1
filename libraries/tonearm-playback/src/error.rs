//! Error types for queue management

use thiserror::Error;
use tonearm_core::TonearmError;

/// Queue errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Tried to install an empty track list
    #[error("Cannot replace queue with an empty track list")]
    EmptyResult,

    /// Navigation on a queue without tracks
    #[error("Queue is empty")]
    EmptyQueue,

    /// Queue has tracks but is not playing
    #[error("No active queue")]
    NoActiveQueue,
}

impl From<QueueError> for TonearmError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::EmptyResult => TonearmError::invalid_input(err.to_string()),
            QueueError::EmptyQueue | QueueError::NoActiveQueue => TonearmError::EmptyQueue,
        }
    }
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
