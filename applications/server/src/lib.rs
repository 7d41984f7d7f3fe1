//! Tonearm Server Library
//!
//! HTTP front end that carries voice turns and renderer events into a
//! playback session and returns the session's responses as JSON.
//!
//! This library exposes the router and its state for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::{ServerConfig, ServerSettings, SessionSettings};
pub use error::{Result, ServerError};
pub use state::AppState;
