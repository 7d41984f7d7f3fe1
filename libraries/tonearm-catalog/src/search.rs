//! Catalog lookups: search, album listing, stream resolution.

use crate::error::{CatalogError, Result};
use crate::types::{AlbumTracksResponse, CatalogAlbum, CatalogTrack, StreamUrlResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tonearm_core::{AlbumId, AlbumSummary, StreamQuality, Track, TrackId};
use tracing::debug;
use url::Url;

/// Catalog API, borrowed for the duration of one call.
///
/// Requests carry a bearer token only when one is given.
pub struct CatalogApi<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> CatalogApi<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Search tracks by free text. An empty result is not an error.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let url = self.search_url("tracks", query, limit)?;
        debug!(url = %url, query = %query, "Searching tracks");

        let response = self.get(url).await?;
        let tracks: Vec<CatalogTrack> = parse_json(response, "track search").await?;

        debug!(results = tracks.len(), "Track search complete");
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// Search albums by free text. An empty result is not an error.
    pub async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>> {
        let url = self.search_url("albums", query, limit)?;
        debug!(url = %url, query = %query, "Searching albums");

        let response = self.get(url).await?;
        let albums: Vec<CatalogAlbum> = parse_json(response, "album search").await?;

        debug!(results = albums.len(), "Album search complete");
        Ok(albums.into_iter().map(AlbumSummary::from).collect())
    }

    /// Get the ordered track list of an album.
    pub async fn get_album_tracks(&self, album_id: &AlbumId) -> Result<Vec<Track>> {
        let url = self.endpoint(&["api", "catalog", "albums", album_id.as_str(), "tracks"])?;
        debug!(url = %url, album_id = %album_id, "Fetching album tracks");

        let response = self.get(url).await?;
        if response.status().as_u16() == 404 {
            return Err(CatalogError::NotFound {
                entity: "Album",
                id: album_id.to_string(),
            });
        }

        let album: AlbumTracksResponse = parse_json(response, "album tracks").await?;
        if album.tracks.is_empty() {
            return Err(CatalogError::NoTracks(album.id));
        }

        debug!(tracks = album.tracks.len(), "Fetched album tracks");
        Ok(album.tracks.into_iter().map(Track::from).collect())
    }

    /// Get a streaming URL for a track.
    ///
    /// The URL is time-limited and should be used promptly.
    pub async fn get_stream_url(&self, track_id: &TrackId, quality: StreamQuality) -> Result<Url> {
        let mut url = self.endpoint(&["api", "catalog", "tracks", track_id.as_str(), "stream"])?;
        url.query_pairs_mut().append_pair("quality", quality.as_str());
        debug!(url = %url, track_id = %track_id, "Resolving stream URL");

        let response = self.get(url).await?;
        if response.status().as_u16() == 404 {
            return Err(CatalogError::NotFound {
                entity: "Track",
                id: track_id.to_string(),
            });
        }

        let stream: StreamUrlResponse = parse_json(response, "stream").await?;
        Url::parse(&stream.url).map_err(|e| {
            CatalogError::ParseError(format!("Invalid stream URL {}: {}", stream.url, e))
        })
    }

    fn search_url(&self, kind: &str, query: &str, limit: u32) -> Result<Url> {
        let mut url = self.endpoint(&["api", "catalog", kind, "search"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Base URL with `segments` appended, each one percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(self.base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response> {
        let mut request = self.http.get(url);
        if let Some(token) = self.access_token {
            request = request.bearer_auth(token);
        }

        request.send().await.map_err(CatalogError::from_send)
    }
}

/// Decode a successful response, mapping 401 and other statuses to errors
async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else if status.as_u16() == 401 {
        Err(CatalogError::AuthRequired)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(CatalogError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn search_query_is_form_encoded() {
        let http = Client::new();
        let url = CatalogApi::new(&http, "https://catalog.example.com", None)
            .search_url("tracks", "AC/DC Back in Black", 1)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://catalog.example.com/api/catalog/tracks/search?q=AC%2FDC+Back+in+Black&limit=1"
        );
    }

    #[test]
    fn path_ids_are_segment_encoded() {
        let http = Client::new();
        let url = CatalogApi::new(&http, "https://catalog.example.com", None)
            .endpoint(&["api", "catalog", "albums", "a/b?c#d", "tracks"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://catalog.example.com/api/catalog/albums/a%2Fb%3Fc%23d/tracks"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let http = Client::new();
        let url = CatalogApi::new(&http, "https://example.com/music", None)
            .endpoint(&["api", "catalog", "tracks", "T1", "stream"])
            .unwrap();

        assert_eq!(url.path(), "/music/api/catalog/tracks/T1/stream");
    }
}
