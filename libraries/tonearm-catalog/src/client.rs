//! HTTP catalog client.

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::search::CatalogApi;
use crate::types::CatalogConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tonearm_core::{AlbumId, AlbumSummary, StreamQuality, Track};
use tracing::{debug, warn};
use url::Url;

/// Catalog client over HTTP.
///
/// The access token is acquired lazily on the first lookup and reused
/// afterwards. When the catalog rejects it, the client logs in again
/// and retries the lookup once.
///
/// # Example
///
/// ```ignore
/// use tonearm_catalog::{CatalogClient, CatalogConfig, HttpCatalogClient};
/// use tonearm_core::StreamQuality;
///
/// let config = CatalogConfig::with_credentials("https://catalog.example.com", "user", "secret");
/// let client = HttpCatalogClient::new(config)?;
///
/// let tracks = client.search_tracks("Metallica The Unforgiven", 1).await?;
/// let url = client.resolve_stream_url(&tracks[0], StreamQuality::High).await?;
/// ```
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    access_token: RwLock<Option<String>>,
}

impl HttpCatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// No request is sent until the first lookup.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tonearm/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self {
            http,
            base_url: url,
            username: config.username,
            password: config.password,
            access_token: RwLock::new(None),
        })
    }

    /// Get the catalog URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check if a token has been acquired.
    pub async fn is_authenticated(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    /// Set a token directly (e.g., one obtained out of band).
    pub async fn set_token(&self, access_token: impl Into<String>) {
        *self.access_token.write().await = Some(access_token.into());
    }

    /// Forget the current token; the next lookup logs in again.
    pub async fn invalidate_token(&self) {
        *self.access_token.write().await = None;
    }

    /// Whether a login is possible at all
    ///
    /// Without credentials the catalog is queried anonymously.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// Current token, logging in first if there is none
    ///
    /// `None` when no token was set and no credentials are configured.
    async fn access_token(&self) -> Result<Option<String>> {
        if let Some(token) = self.access_token.read().await.as_ref() {
            return Ok(Some(token.clone()));
        }

        if !self.has_credentials() {
            return Ok(None);
        }

        let mut slot = self.access_token.write().await;
        // Another lookup may have logged in while we waited for the lock
        if let Some(token) = slot.as_ref() {
            return Ok(Some(token.clone()));
        }

        let login = AuthClient::new(&self.http, &self.base_url)
            .login(&self.username, &self.password)
            .await?;
        *slot = Some(login.access_token.clone());

        Ok(Some(login.access_token))
    }

    /// Execute an operation with automatic re-login on 401.
    async fn with_auto_refresh<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self.access_token().await?;

        match operation(token).await {
            Err(CatalogError::AuthRequired) if self.has_credentials() => {
                warn!("Catalog token rejected, logging in again");
                self.invalidate_token().await;

                let token = self.access_token().await?;
                operation(token).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        self.with_auto_refresh(move |token| async move {
            CatalogApi::new(&self.http, &self.base_url, token.as_deref())
                .search_tracks(query, limit)
                .await
        })
        .await
    }

    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>> {
        self.with_auto_refresh(move |token| async move {
            CatalogApi::new(&self.http, &self.base_url, token.as_deref())
                .search_albums(query, limit)
                .await
        })
        .await
    }

    async fn fetch_album_tracks(&self, album_id: &AlbumId) -> Result<Vec<Track>> {
        self.with_auto_refresh(move |token| async move {
            CatalogApi::new(&self.http, &self.base_url, token.as_deref())
                .get_album_tracks(album_id)
                .await
        })
        .await
    }

    async fn resolve_stream_url(&self, track: &Track, quality: StreamQuality) -> Result<Url> {
        let url = self
            .with_auto_refresh(move |token| async move {
                CatalogApi::new(&self.http, &self.base_url, token.as_deref())
                    .get_stream_url(&track.id, quality)
                    .await
            })
            .await?;

        debug!(track_id = %track.id, "Resolved stream URL");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(HttpCatalogClient::new(CatalogConfig::new("https://example.com")).is_ok());
        assert!(HttpCatalogClient::new(CatalogConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(HttpCatalogClient::new(CatalogConfig::new("")).is_err());
        assert!(HttpCatalogClient::new(CatalogConfig::new("not-a-url")).is_err());
        assert!(HttpCatalogClient::new(CatalogConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            HttpCatalogClient::new(CatalogConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.url(), "https://example.com");
    }

    #[tokio::test]
    async fn test_token_is_lazy() {
        let client = HttpCatalogClient::new(CatalogConfig::new("https://example.com"))
            .expect("valid url");
        assert!(!client.is_authenticated().await);

        client.set_token("abc").await;
        assert!(client.is_authenticated().await);

        client.invalidate_token().await;
        assert!(!client.is_authenticated().await);
    }
}
