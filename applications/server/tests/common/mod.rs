/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use tonearm_catalog::{CatalogClient, CatalogError, Result};
use tonearm_core::{AlbumId, AlbumSummary, StreamQuality, Track};
use tonearm_server::{create_router, AppState};
use tonearm_session::{SessionConfig, SessionController};
use url::Url;

/// In-memory catalog with one album and one single
pub struct FakeCatalog {
    pub albums: Vec<(AlbumSummary, Vec<Track>)>,
    pub singles: Vec<Track>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        let album = AlbumSummary::new("A1", "The Fat of the Land", "The Prodigy");
        let tracks = vec![
            Track::new("T1", "Smack My Bitch Up", "The Prodigy"),
            Track::new("T2", "Breathe", "The Prodigy"),
        ];

        Self {
            albums: vec![(album, tracks)],
            singles: vec![Track::new("Tunforgiven", "The Unforgiven", "Metallica")],
        }
    }
}

fn matches(query: &str, artist: &str, title: &str) -> bool {
    let query = query.to_lowercase();
    query.contains(&artist.to_lowercase()) && query.contains(&title.to_lowercase())
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        Ok(self
            .singles
            .iter()
            .filter(|track| matches(query, &track.artist, &track.title))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>> {
        Ok(self
            .albums
            .iter()
            .map(|(album, _)| album)
            .filter(|album| matches(query, &album.artist, &album.title))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_album_tracks(&self, album_id: &AlbumId) -> Result<Vec<Track>> {
        self.albums
            .iter()
            .find(|(album, _)| &album.id == album_id)
            .map(|(_, tracks)| tracks.clone())
            .ok_or_else(|| CatalogError::NotFound {
                entity: "Album",
                id: album_id.to_string(),
            })
    }

    async fn resolve_stream_url(&self, track: &Track, _quality: StreamQuality) -> Result<Url> {
        Url::parse(&format!("https://stream_url.com/{}", track.id))
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

/// Router over a fresh session backed by `FakeCatalog`
pub fn create_test_app(application_ids: Vec<String>) -> Router {
    let controller = SessionController::new(Arc::new(FakeCatalog::default()), SessionConfig::default());
    create_router(AppState::new(controller, application_ids))
}

pub mod fixtures {
    pub const APPLICATION_ID: &str = "amzn1.echo-sdk-ams.app.tonearm-test";
    pub const SESSION_ID: &str = "session-1";
}
