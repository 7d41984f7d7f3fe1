/// Playback directives sent to the audio endpoint
use crate::types::Track;
use serde::{Deserialize, Serialize};
use url::Url;

/// How a play directive interacts with the renderer's own queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "behavior", content = "previous_token", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayMode {
    /// Drop whatever is playing and start this item now
    ReplaceAll,

    /// Splice this item after the one whose token is given
    ///
    /// The renderer rejects the directive when the given token is not
    /// the one it is currently playing.
    EnqueueAfter(String),
}

/// Renderer-facing stream description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    pub url: Url,

    /// Continuation token, equal to the track id
    pub token: String,

    pub offset_ms: u64,
}

/// Outbound playback directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    Play {
        mode: PlayMode,
        track: Track,
        stream: AudioStream,
    },
    Stop,
}

impl Directive {
    /// Continuation token of a play directive
    pub fn token(&self) -> Option<&str> {
        match self {
            Directive::Play { stream, .. } => Some(&stream.token),
            Directive::Stop => None,
        }
    }

    /// Token the renderer must currently be playing for an enqueue to apply
    pub fn expected_previous_token(&self) -> Option<&str> {
        match self {
            Directive::Play {
                mode: PlayMode::EnqueueAfter(previous),
                ..
            } => Some(previous),
            _ => None,
        }
    }

    pub fn stream_url(&self) -> Option<&Url> {
        match self {
            Directive::Play { stream, .. } => Some(&stream.url),
            Directive::Stop => None,
        }
    }

    pub fn track(&self) -> Option<&Track> {
        match self {
            Directive::Play { track, .. } => Some(track),
            Directive::Stop => None,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Directive::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(mode: PlayMode) -> Directive {
        Directive::Play {
            mode,
            track: Track::new("T2", "Breathe", "The Prodigy"),
            stream: AudioStream {
                url: Url::parse("https://stream_url.com").unwrap(),
                token: "T2".to_string(),
                offset_ms: 0,
            },
        }
    }

    #[test]
    fn enqueue_exposes_previous_token() {
        let directive = play(PlayMode::EnqueueAfter("T1".to_string()));
        assert_eq!(directive.token(), Some("T2"));
        assert_eq!(directive.expected_previous_token(), Some("T1"));
    }

    #[test]
    fn replace_all_has_no_previous_token() {
        let directive = play(PlayMode::ReplaceAll);
        assert_eq!(directive.expected_previous_token(), None);
        assert!(!directive.is_stop());
    }

    #[test]
    fn stop_serializes_as_tagged_variant() {
        let json = serde_json::to_value(Directive::Stop).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Stop" }));
    }

    #[test]
    fn enqueue_mode_serializes_with_previous_token() {
        let json = serde_json::to_value(PlayMode::EnqueueAfter("T1".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "behavior": "ENQUEUE_AFTER", "previous_token": "T1" })
        );
    }
}
