//! Error types for the catalog client.

use thiserror::Error;
use tonearm_core::TonearmError;

/// Errors that can occur when talking to the music catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Token missing or rejected
    #[error("Authentication required")]
    AuthRequired,

    /// Login failed (invalid credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid catalog URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    ServerUnreachable(String),

    /// Entity does not exist in the catalog
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Album resolved but has nothing playable
    #[error("No tracks in album {0}")]
    NoTracks(String),
}

impl CatalogError {
    /// Map a `send()` failure, singling out connection problems
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            CatalogError::ServerUnreachable(err.to_string())
        } else {
            CatalogError::Request(err)
        }
    }
}

impl From<CatalogError> for TonearmError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { entity, id } => TonearmError::not_found(entity, id),
            CatalogError::NoTracks(album) => TonearmError::not_found("Album tracks", album),
            CatalogError::AuthRequired | CatalogError::AuthFailed(_) => {
                TonearmError::auth(err.to_string())
            }
            CatalogError::InvalidUrl(msg) => TonearmError::invalid_input(msg),
            other => TonearmError::transport(other.to_string()),
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
