//! Types for catalog API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tonearm_core::{AlbumSummary, Track, TrackId};

/// Configuration for connecting to the catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog (e.g., "https://catalog.example.com")
    pub url: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl CatalogConfig {
    /// Create a new catalog config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: String::new(),
            password: String::new(),
        }
    }

    /// Create a config with login credentials.
    pub fn with_credentials(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token validity in seconds
    pub expires_in: u64,
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A track as returned by the catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogTrack {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub duration_ms: Option<u64>,
}

impl From<CatalogTrack> for Track {
    fn from(track: CatalogTrack) -> Self {
        let artist = track
            .artist
            .or(track.album_artist)
            .unwrap_or_else(|| "Unknown Artist".to_string());

        Track {
            id: TrackId::new(track.id),
            title: track.title,
            artist,
            album: track.album,
            duration: track.duration_ms.map(Duration::from_millis),
        }
    }
}

/// Album as returned by the catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogAlbum {
    pub id: String,
    pub title: String,
    pub album_artist: Option<String>,
    pub track_count: Option<u32>,
}

impl From<CatalogAlbum> for AlbumSummary {
    fn from(album: CatalogAlbum) -> Self {
        AlbumSummary::new(
            album.id,
            album.title,
            album
                .album_artist
                .unwrap_or_else(|| "Unknown Artist".to_string()),
        )
    }
}

/// Full album listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTracksResponse {
    pub id: String,
    #[serde(default)]
    pub tracks: Vec<CatalogTrack>,
}

/// Stream URL response.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamUrlResponse {
    pub url: String,
    /// URL validity in seconds
    pub expires_in: Option<u64>,
}
