/// Renderer-originated events
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress notification sent by the audio endpoint
///
/// Events carry no queue reference; the session infers context from its own queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RendererEvent {
    /// Current track is about to end, the renderer wants the next item buffered
    NearlyFinished,

    /// Playback of the current item started
    Started,

    /// Playback was stopped (by the user or a `Stop` directive)
    Stopped,

    /// The renderer could not play the current item
    Failed { error: PlaybackFailure },

    /// Current item played to its end
    Finished,
}

impl RendererEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RendererEvent::NearlyFinished => "nearly_finished",
            RendererEvent::Started => "started",
            RendererEvent::Stopped => "stopped",
            RendererEvent::Failed { .. } => "failed",
            RendererEvent::Finished => "finished",
        }
    }
}

/// Error details reported with a failed playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackFailure {
    /// Renderer error category, e.g. `MEDIA_ERROR_SERVICE_UNAVAILABLE`
    #[serde(rename = "type")]
    pub kind: String,

    pub message: String,
}

impl PlaybackFailure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PlaybackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
