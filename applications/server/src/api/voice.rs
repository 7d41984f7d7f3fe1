/// Voice and renderer event API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::collections::HashMap;
use tonearm_core::{PlaybackFailure, RendererEvent};
use tonearm_session::SessionResponse;

/// One request from the voice front end or the audio endpoint
#[derive(Debug, Deserialize)]
pub struct VoiceEnvelope {
    pub session: VoiceSession,
    pub request: VoiceRequest,
}

#[derive(Debug, Deserialize)]
pub struct VoiceSession {
    pub session_id: String,
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub request_id: String,

    #[serde(flatten)]
    pub kind: RequestKind,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum RequestKind {
    LaunchRequest,
    IntentRequest {
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(default)]
        reason: Option<String>,
    },
    PlaybackStarted,
    PlaybackStopped,
    PlaybackNearlyFinished,
    PlaybackFinished,
    PlaybackFailed {
        error: PlaybackFailure,
    },
}

impl RequestKind {
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::LaunchRequest => "LaunchRequest",
            RequestKind::IntentRequest { .. } => "IntentRequest",
            RequestKind::SessionEndedRequest { .. } => "SessionEndedRequest",
            RequestKind::PlaybackStarted => "PlaybackStarted",
            RequestKind::PlaybackStopped => "PlaybackStopped",
            RequestKind::PlaybackNearlyFinished => "PlaybackNearlyFinished",
            RequestKind::PlaybackFinished => "PlaybackFinished",
            RequestKind::PlaybackFailed { .. } => "PlaybackFailed",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Intent {
    pub name: String,

    #[serde(default)]
    pub slots: HashMap<String, String>,
}

/// POST /api/voice - Handle one voice turn or renderer event
///
/// Responds with `null` when the session has nothing to say or play.
pub async fn handle_voice(
    State(state): State<AppState>,
    Json(envelope): Json<VoiceEnvelope>,
) -> Result<Json<Option<SessionResponse>>> {
    let VoiceEnvelope { session, request } = envelope;

    if !state.accepts(&session.application_id) {
        tracing::warn!(
            application_id = %session.application_id,
            session_id = %session.session_id,
            "Rejected request from unknown application"
        );
        return Err(ServerError::Forbidden(session.application_id));
    }

    tracing::info!(
        request_id = %request.request_id,
        session_id = %session.session_id,
        request_type = request.kind.name(),
        "Voice request"
    );

    let mut controller = state.session.lock().await;

    let response = match request.kind {
        RequestKind::LaunchRequest => Some(controller.launch()),
        RequestKind::IntentRequest { intent } => {
            Some(controller.handle_intent(&intent.name, &intent.slots).await)
        }
        RequestKind::SessionEndedRequest { reason } => {
            // The voice turn closing does not stop the audio
            tracing::info!(
                session_id = %session.session_id,
                reason = reason.as_deref().unwrap_or("unspecified"),
                "Voice session ended"
            );
            None
        }
        RequestKind::PlaybackStarted => controller.handle_event(RendererEvent::Started).await,
        RequestKind::PlaybackStopped => controller.handle_event(RendererEvent::Stopped).await,
        RequestKind::PlaybackNearlyFinished => {
            controller.handle_event(RendererEvent::NearlyFinished).await
        }
        RequestKind::PlaybackFinished => controller.handle_event(RendererEvent::Finished).await,
        RequestKind::PlaybackFailed { error } => {
            controller
                .handle_event(RendererEvent::Failed { error })
                .await
        }
    };

    Ok(Json(response))
}

/// DELETE /api/session - Tear the playback session down
pub async fn end_session(State(state): State<AppState>) -> StatusCode {
    state.session.lock().await.end_session();
    StatusCode::NO_CONTENT
}
