//! Session policies

use serde::{Deserialize, Serialize};
use tonearm_core::StreamQuality;

/// What `Stop` does to the track list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopPolicy {
    /// Deactivate but keep the tracks, so `Next` after `Stop` resumes the same list
    #[default]
    Retain,

    /// Forget the tracks
    Clear,
}

/// What a renderer playback failure does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure, emit nothing
    #[default]
    LogOnly,

    /// Replace playback with the next track, if there is one (no wrap)
    SkipToNext,
}

/// Configuration for a session controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub stop_policy: StopPolicy,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Quality hint for stream URL resolution
    #[serde(default)]
    pub quality: StreamQuality,
}
