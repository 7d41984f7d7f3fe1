//! Tonearm - Playback Queue
//!
//! Queue state and directive sequencing for a voice-driven playback session.
//!
//! This crate provides:
//! - `PlaybackQueue`: ordered track list with a wrapping cursor
//! - `DirectiveSequencer`: replace/enqueue/stop directives with continuation tokens
//!
//! Neither type performs I/O. Stream URLs are resolved by the caller and
//! handed to the sequencer, so a queue mutation can be deferred until every
//! fallible step has succeeded.
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::Track;
//! use tonearm_playback::{DirectiveSequencer, PlaybackQueue};
//! use url::Url;
//!
//! let mut queue = PlaybackQueue::new();
//! queue
//!     .replace(vec![
//!         Track::new("T1", "Smack My Bitch Up", "The Prodigy"),
//!         Track::new("T2", "Breathe", "The Prodigy"),
//!     ])
//!     .unwrap();
//!
//! // Renderer is nearly done with T1: enqueue T2 behind it
//! let previous = queue.current().unwrap().id.clone();
//! let next = queue.peek_next().unwrap().clone();
//! let url = Url::parse("https://cdn.example.com/T2.mp3").unwrap();
//! let directive = DirectiveSequencer::build_enqueue(&next, url, &previous);
//! queue.advance().unwrap();
//!
//! assert_eq!(directive.expected_previous_token(), Some("T1"));
//! assert_eq!(queue.current().unwrap().id.as_str(), "T2");
//! ```

mod error;
mod queue;
mod sequencer;

// Public exports
pub use error::{QueueError, Result};
pub use queue::PlaybackQueue;
pub use sequencer::DirectiveSequencer;
