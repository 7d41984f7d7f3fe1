//! The catalog seam used by the session layer.

use crate::error::Result;
use async_trait::async_trait;
use tonearm_core::{AlbumId, AlbumSummary, StreamQuality, Track};
use url::Url;

/// Resolves free-text queries to playable tracks
///
/// Implementations own their own network timeout policy. The session
/// never retries on its own.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Best matches for a song query, best first
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>>;

    /// Best matches for an album query, best first
    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>>;

    /// Ordered track list of an album; `NoTracks` when it has none
    async fn fetch_album_tracks(&self, album_id: &AlbumId) -> Result<Vec<Track>>;

    /// Short-lived playable URL for a track
    async fn resolve_stream_url(&self, track: &Track, quality: StreamQuality) -> Result<Url>;
}
