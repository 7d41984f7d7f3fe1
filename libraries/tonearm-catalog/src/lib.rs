//! Tonearm Catalog Client
//!
//! Resolves spoken song and album queries against a remote music catalog.
//!
//! # Features
//!
//! - **`CatalogClient` trait**: the narrow seam the session layer depends on
//! - **Lazy authentication**: the token is acquired on first use and refreshed on 401
//! - **Lookups**: track search, album search, album track listing, stream URL resolution
//!
//! # Example
//!
//! ```ignore
//! use tonearm_catalog::{CatalogClient, CatalogConfig, HttpCatalogClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig::with_credentials("https://catalog.example.com", "user", "secret");
//!     let client = HttpCatalogClient::new(config)?;
//!
//!     let albums = client.search_albums("The Prodigy The Fat of the Land", 1).await?;
//!     let tracks = client.fetch_album_tracks(&albums[0].id).await?;
//!     println!("Found {} tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod search;
mod types;

// Re-export main types
pub use catalog::CatalogClient;
pub use client::HttpCatalogClient;
pub use error::{CatalogError, Result};
pub use types::{
    AlbumTracksResponse, CatalogAlbum, CatalogConfig, CatalogTrack, LoginResponse,
    StreamUrlResponse,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use search::CatalogApi;
