/// Track domain type
use crate::types::{AlbumId, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable track as resolved by the catalog
///
/// Immutable once fetched. The stream locator is not stored here:
/// it is resolved on demand because catalog stream URLs are short-lived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Album title
    #[serde(default)]
    pub album: Option<String>,

    /// Track duration
    #[serde(default)]
    pub duration: Option<Duration>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration: None,
        }
    }

    /// Set the album title
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the track duration
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Album search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub title: String,
    /// Album artist display name
    pub artist: String,
}

impl AlbumSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: AlbumId::new(id),
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Stream quality hint passed to the catalog when resolving a stream URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamQuality {
    Low,
    Medium,
    #[default]
    High,
}

impl StreamQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamQuality::Low => "low",
            StreamQuality::Medium => "medium",
            StreamQuality::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_metadata() {
        let track = Track::new("T1", "The Unforgiven", "Metallica")
            .with_album("Metallica")
            .with_duration(Duration::from_secs(387));

        assert_eq!(track.id.as_str(), "T1");
        assert_eq!(track.album.as_deref(), Some("Metallica"));
        assert_eq!(track.duration, Some(Duration::from_secs(387)));
    }

    #[test]
    fn track_deserializes_without_optional_fields() {
        let track: Track =
            serde_json::from_str(r#"{"id":"T9","title":"Breathe","artist":"The Prodigy"}"#)
                .unwrap();
        assert_eq!(track.id, TrackId::new("T9"));
        assert!(track.album.is_none());
        assert!(track.duration.is_none());
    }

    #[test]
    fn default_quality_is_high() {
        assert_eq!(StreamQuality::default(), StreamQuality::High);
        assert_eq!(StreamQuality::default().as_str(), "high");
    }
}
