//! Session state machine
//!
//! Folds voice commands and renderer events into the playback queue and
//! produces the response for each of them. Every fallible step (search,
//! album fetch, stream URL resolution) runs before the queue is touched,
//! so a failed turn leaves the queue exactly as it was.

use crate::config::{FailurePolicy, SessionConfig, StopPolicy};
use crate::interpreter::CommandInterpreter;
use crate::response::{SessionResponse, ERROR, WELCOME_TEXT, WRONG_REQUEST};
use std::collections::HashMap;
use std::sync::Arc;
use tonearm_catalog::{CatalogClient, CatalogError};
use tonearm_core::{Command, PlaybackFailure, RendererEvent, Result, TonearmError, Track};
use tonearm_playback::{DirectiveSequencer, PlaybackQueue};
use url::Url;

/// Only the best match is ever played
const SEARCH_LIMIT: u32 = 1;

/// Where the session stands between calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing has been played yet
    #[default]
    Idle,

    /// Queue active, renderer addressing the current track
    Playing,

    /// Stopped by the user; the queue may still hold tracks
    Stopped,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

/// Drives one playback session
///
/// Calls take `&mut self`, so at most one request is in flight per
/// controller. Wrap it in a mutex to share it between tasks.
pub struct SessionController {
    catalog: Arc<dyn CatalogClient>,
    config: SessionConfig,
    queue: PlaybackQueue,
    state: SessionState,
}

impl SessionController {
    pub fn new(catalog: Arc<dyn CatalogClient>, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            queue: PlaybackQueue::new(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Greeting for a voice launch with no command
    pub fn launch(&self) -> SessionResponse {
        tracing::info!(state = ?self.state, "Session launched");
        SessionResponse::ask(WELCOME_TEXT)
    }

    /// Interpret a recognized intent and handle the resulting command
    pub async fn handle_intent(
        &mut self,
        name: &str,
        slots: &HashMap<String, String>,
    ) -> SessionResponse {
        let command = CommandInterpreter::interpret(name, slots);
        tracing::info!(intent = name, command = command.name(), "Intent received");
        self.handle_command(command).await
    }

    /// Handle one voice command
    ///
    /// Never fails: every error becomes a spoken response.
    pub async fn handle_command(&mut self, command: Command) -> SessionResponse {
        let result = match &command {
            Command::PlaySong { query } => self.play_song(query).await,
            Command::PlayAlbum { query } => self.play_album(query).await,
            Command::Next => self.skip(Direction::Next).await,
            Command::Previous => self.skip(Direction::Previous).await,
            Command::Stop => Ok(self.stop()),
            Command::Unrecognized { raw_name } => {
                Err(TonearmError::UnrecognizedCommand(raw_name.clone()))
            }
        };

        result.unwrap_or_else(|err| self.error_response(&command, err))
    }

    /// Fold a renderer event into the session
    ///
    /// Returns a bare directive when the renderer should be fed, `None`
    /// otherwise.
    pub async fn handle_event(&mut self, event: RendererEvent) -> Option<SessionResponse> {
        match event {
            RendererEvent::NearlyFinished => self.prebuffer_next().await,
            RendererEvent::Failed { error } => self.playback_failed(&error).await,
            RendererEvent::Started | RendererEvent::Stopped | RendererEvent::Finished => {
                tracing::debug!(event = event.name(), state = ?self.state, "Renderer event");
                None
            }
        }
    }

    /// Explicit session teardown
    ///
    /// Applies the stop policy without emitting a directive.
    pub fn end_session(&mut self) {
        tracing::info!(state = ?self.state, tracks = self.queue.len(), "Ending session");
        self.apply_stop_policy();
        if self.state == SessionState::Playing {
            self.state = SessionState::Stopped;
        }
    }

    async fn play_song(&mut self, query: &str) -> Result<SessionResponse> {
        tracing::info!(query, "Searching song");

        let track = self
            .catalog
            .search_tracks(query, SEARCH_LIMIT)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TonearmError::not_found("Song", query))?;

        let url = self
            .catalog
            .resolve_stream_url(&track, self.config.quality)
            .await?;

        let directive = DirectiveSequencer::build_replace(&track, url);
        let response = SessionResponse::play(&track.title, &track.artist, directive);

        self.queue.replace(vec![track])?;
        self.state = SessionState::Playing;

        Ok(response)
    }

    async fn play_album(&mut self, query: &str) -> Result<SessionResponse> {
        tracing::info!(query, "Searching album");

        let album = self
            .catalog
            .search_albums(query, SEARCH_LIMIT)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TonearmError::not_found("Album", query))?;

        let tracks = match self.catalog.fetch_album_tracks(&album.id).await {
            Ok(tracks) => tracks,
            Err(CatalogError::NoTracks(_)) => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        let first = tracks
            .first()
            .ok_or_else(|| TonearmError::not_found("Album", query))?;

        let url = self
            .catalog
            .resolve_stream_url(first, self.config.quality)
            .await?;

        let directive = DirectiveSequencer::build_replace(first, url);
        let response =
            SessionResponse::play(&format!("album {}", album.title), &album.artist, directive);

        tracing::info!(album = %album.id, tracks = tracks.len(), "Album queued");
        self.queue.replace(tracks)?;
        self.state = SessionState::Playing;

        Ok(response)
    }

    async fn skip(&mut self, direction: Direction) -> Result<SessionResponse> {
        let mut staged = self.queue.clone();
        let track = match direction {
            Direction::Next => staged.advance()?,
            Direction::Previous => staged.retreat()?,
        }
        .clone();

        let url = self
            .catalog
            .resolve_stream_url(&track, self.config.quality)
            .await?;

        tracing::info!(
            direction = direction.as_str(),
            position = staged.position(),
            track = %track.id,
            "Skipping"
        );

        let directive = DirectiveSequencer::build_replace(&track, url);
        self.queue = staged;
        self.state = SessionState::Playing;

        Ok(SessionResponse::play(&track.title, &track.artist, directive))
    }

    fn stop(&mut self) -> SessionResponse {
        tracing::info!(policy = ?self.config.stop_policy, "Stopping playback");
        self.apply_stop_policy();
        self.state = SessionState::Stopped;
        SessionResponse::stop()
    }

    fn apply_stop_policy(&mut self) {
        match self.config.stop_policy {
            StopPolicy::Retain => self.queue.deactivate(),
            StopPolicy::Clear => self.queue.clear(),
        }
    }

    async fn prebuffer_next(&mut self) -> Option<SessionResponse> {
        if self.state != SessionState::Playing {
            tracing::debug!(state = ?self.state, "Ignoring nearly finished outside playback");
            return None;
        }

        let previous = self.queue.current().ok()?.id.clone();
        let Some(next) = self.queue.peek_next().cloned() else {
            tracing::debug!(track = %previous, "Last track in queue, nothing to enqueue");
            return None;
        };

        let url = self.resolve_quietly(&next).await?;

        let directive = DirectiveSequencer::build_enqueue(&next, url, &previous);
        if let Err(e) = self.queue.advance() {
            tracing::warn!("Queue advance failed after prebuffer: {}", e);
            return None;
        }

        tracing::info!(previous = %previous, next = %next.id, "Enqueued next track");
        Some(SessionResponse::directive_only(directive))
    }

    /// Stream URL for a renderer-driven turn, where failures get no speech
    async fn resolve_quietly(&self, track: &Track) -> Option<Url> {
        match self
            .catalog
            .resolve_stream_url(track, self.config.quality)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(track = %track.id, error = %e, "Could not resolve stream");
                None
            }
        }
    }

    async fn playback_failed(&mut self, failure: &PlaybackFailure) -> Option<SessionResponse> {
        tracing::error!(
            state = ?self.state,
            position = self.queue.position(),
            "Playback failed: {}",
            failure
        );

        match self.config.failure_policy {
            FailurePolicy::LogOnly => None,
            FailurePolicy::SkipToNext => self.skip_after_failure().await,
        }
    }

    async fn skip_after_failure(&mut self) -> Option<SessionResponse> {
        if self.state != SessionState::Playing {
            return None;
        }

        let next = self.queue.peek_next().cloned()?;
        let url = self.resolve_quietly(&next).await?;

        let directive = DirectiveSequencer::build_replace(&next, url);
        self.queue.advance().ok()?;

        tracing::info!(track = %next.id, "Skipped failed track");
        Some(SessionResponse::directive_only(directive))
    }

    fn error_response(&self, command: &Command, err: TonearmError) -> SessionResponse {
        match (err, command) {
            (TonearmError::NotFound { .. }, Command::PlaySong { query }) => {
                tracing::info!(query = %query, "Song not found");
                SessionResponse::song_not_found(query)
            }
            (TonearmError::NotFound { .. }, Command::PlayAlbum { query }) => {
                tracing::info!(query = %query, "Album not found");
                SessionResponse::album_not_found(query)
            }
            (TonearmError::EmptyQueue, Command::Next) => {
                SessionResponse::empty_list(Direction::Next.as_str())
            }
            (TonearmError::EmptyQueue, Command::Previous) => {
                SessionResponse::empty_list(Direction::Previous.as_str())
            }
            (TonearmError::UnrecognizedCommand(name), _) => {
                tracing::warn!(intent = %name, "Unrecognized intent");
                SessionResponse::ask(WRONG_REQUEST)
            }
            (err, command) => {
                tracing::error!(
                    command = command.name(),
                    state = ?self.state,
                    "Command failed: {}",
                    err
                );
                SessionResponse::ask(ERROR)
            }
        }
    }
}
