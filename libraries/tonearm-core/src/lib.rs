//! Tonearm Core
//!
//! Shared domain types and error handling for Tonearm, a voice-driven
//! playback session controller.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `AlbumSummary`, `Command`, `RendererEvent`, `Directive`
//! - **Error Handling**: Unified `TonearmError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::types::{AudioStream, Directive, PlayMode, Track};
//! use url::Url;
//!
//! let track = Track::new("T1", "The Unforgiven", "Metallica");
//! let directive = Directive::Play {
//!     mode: PlayMode::ReplaceAll,
//!     stream: AudioStream {
//!         url: Url::parse("https://stream_url.com").unwrap(),
//!         token: track.id.to_string(),
//!         offset_ms: 0,
//!     },
//!     track,
//! };
//!
//! assert_eq!(directive.token(), Some("T1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TonearmError};

pub use types::{
    AlbumId, AlbumSummary, AudioStream, Command, Directive, PlayMode, PlaybackFailure,
    RendererEvent, StreamQuality, Track, TrackId,
};
