//! Playback queue
//!
//! Ordered track list plus a cursor. Every position change goes through
//! the methods below so the wraparound and empty-queue rules live in
//! one place.

use crate::error::{QueueError, Result};
use tonearm_core::Track;

/// Session-owned playback queue
///
/// Structure:
/// ```text
///   tracks:   [ A ][ B ][ C ][ D ]
///                      ^
///                   position
/// ```
///
/// Invariant: when `active` and non-empty, `position < tracks.len()`.
/// An empty queue is never active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackQueue {
    /// Tracks in play order
    tracks: Vec<Track>,

    /// Index of the track the renderer is addressing
    position: usize,

    /// Whether the queue is driving playback
    active: bool,
}

impl PlaybackQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new track list and start from its first track
    ///
    /// Fails without touching the queue when `tracks` is empty.
    pub fn replace(&mut self, tracks: Vec<Track>) -> Result<&Track> {
        if tracks.is_empty() {
            return Err(QueueError::EmptyResult);
        }

        self.tracks = tracks;
        self.position = 0;
        self.active = true;
        Ok(&self.tracks[0])
    }

    /// Track at the current position
    pub fn current(&self) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        if !self.active {
            return Err(QueueError::NoActiveQueue);
        }
        Ok(&self.tracks[self.position])
    }

    /// Move forward one track, wrapping to the first track past the end
    ///
    /// Reactivates a deactivated queue.
    pub fn advance(&mut self) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        self.position = if self.position + 1 < self.tracks.len() {
            self.position + 1
        } else {
            0
        };
        self.active = true;
        Ok(&self.tracks[self.position])
    }

    /// Move back one track, wrapping to the last track before the start
    ///
    /// Reactivates a deactivated queue.
    pub fn retreat(&mut self) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        self.position = match self.position.checked_sub(1) {
            Some(previous) => previous,
            None => self.tracks.len() - 1,
        };
        self.active = true;
        Ok(&self.tracks[self.position])
    }

    /// Track after the current one, for pre-buffering
    ///
    /// Never wraps: `None` on the last track or on an inactive queue.
    pub fn peek_next(&self) -> Option<&Track> {
        if !self.active {
            return None;
        }
        self.tracks.get(self.position + 1)
    }

    /// Stop driving playback but keep the track list
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Drop the track list entirely
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.position = 0;
        self.active = false;
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// All tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
