//! Tonearm - Session
//!
//! Turns recognized voice intents and renderer progress events into
//! spoken responses and playback directives.
//!
//! This crate provides:
//! - `CommandInterpreter`: intent name + slots → `Command`
//! - `SessionController`: the per-session state machine over a `PlaybackQueue`
//! - `SessionResponse`: speech, reprompt, directive and end-of-session flag
//! - `SessionConfig`: stop and failure policies plus the stream quality hint
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tonearm_catalog::{CatalogConfig, HttpCatalogClient};
//! use tonearm_session::{SessionConfig, SessionController};
//!
//! let catalog = HttpCatalogClient::new(CatalogConfig::with_credentials(
//!     "https://catalog.example.com",
//!     "user",
//!     "secret",
//! ))?;
//! let mut session = SessionController::new(Arc::new(catalog), SessionConfig::default());
//!
//! let response = session
//!     .handle_command(tonearm_core::Command::PlaySong {
//!         query: "Metallica The Unforgiven".to_string(),
//!     })
//!     .await;
//! println!("{:?}", response.speech);
//! ```

mod config;
mod controller;
mod interpreter;
mod response;

pub use config::{FailurePolicy, SessionConfig, StopPolicy};
pub use controller::{SessionController, SessionState};
pub use interpreter::{
    CommandInterpreter, ALBUM_INTENT, ALBUM_SLOT, CANCEL_INTENT, NEXT_INTENT, PREVIOUS_INTENT,
    SINGLE_SONG_INTENT, SONG_SLOT, STOP_INTENT,
};
pub use response::{
    SessionResponse, CHOOSE_THE_MUSIC_REQUEST, ERROR, WELCOME_TEXT, WRONG_REQUEST,
};
