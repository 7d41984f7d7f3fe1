//! Directive sequencing
//!
//! Builds the play/stop directives sent to the audio endpoint. Every play
//! directive carries the track id as its continuation token; enqueue
//! directives also name the token they must follow, so the renderer can
//! splice the next item without a gap and notice when it is out of sync.

use tonearm_core::{AudioStream, Directive, PlayMode, Track, TrackId};
use url::Url;

/// Stateless directive builder
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveSequencer;

impl DirectiveSequencer {
    /// Replace whatever the renderer is playing with `track`
    pub fn build_replace(track: &Track, url: Url) -> Directive {
        Self::build_play(track, url, PlayMode::ReplaceAll)
    }

    /// Queue `track` behind the item whose token is `previous`
    pub fn build_enqueue(track: &Track, url: Url, previous: &TrackId) -> Directive {
        Self::build_play(track, url, PlayMode::EnqueueAfter(previous.to_string()))
    }

    pub fn build_stop() -> Directive {
        Directive::Stop
    }

    fn build_play(track: &Track, url: Url, mode: PlayMode) -> Directive {
        Directive::Play {
            mode,
            stream: AudioStream {
                url,
                token: track.id.to_string(),
                offset_ms: 0,
            },
            track: track.clone(),
        }
    }
}
