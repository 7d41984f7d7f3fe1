/// API integration tests
/// Drives the router end to end against an in-memory catalog
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::{create_test_app, fixtures};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn envelope(request: Value) -> Value {
    json!({
        "session": {
            "session_id": fixtures::SESSION_ID,
            "application_id": fixtures::APPLICATION_ID,
        },
        "request": request,
    })
}

fn intent(name: &str, slots: Value) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "request_id": "req-intent",
        "intent": { "name": name, "slots": slots },
    }))
}

fn event(kind: &str) -> Value {
    envelope(json!({ "type": kind, "request_id": "req-event" }))
}

/// POST a JSON body to /api/voice and return status and parsed body
async fn post_voice(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri("/api/voice")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Test GET /api/health
#[tokio::test]
async fn test_health() {
    let app = create_test_app(vec![]);

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

/// Test launch greets and keeps the session open
#[tokio::test]
async fn test_launch_request() {
    let app = create_test_app(vec![]);

    let (status, json) = post_voice(
        &app,
        envelope(json!({ "type": "LaunchRequest", "request_id": "req-launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["speech"], "Welcome to Tonearm.");
    assert_eq!(
        json["reprompt"],
        "Say 'play' or 'play album' and then name the artist and the title."
    );
    assert_eq!(json["should_end_session"], false);
    assert!(json.get("directive").is_none());
}

/// Test playing a single song
#[tokio::test]
async fn test_single_song_intent() {
    let app = create_test_app(vec![]);

    let (status, json) = post_voice(
        &app,
        intent("SingleSong", json!({ "song": "Metallica The Unforgiven" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["speech"], "Playing The Unforgiven by Metallica");
    assert_eq!(json["should_end_session"], true);
    assert_eq!(json["directive"]["type"], "Play");
    assert_eq!(json["directive"]["mode"]["behavior"], "REPLACE_ALL");
    assert_eq!(json["directive"]["stream"]["token"], "Tunforgiven");
    assert_eq!(
        json["directive"]["stream"]["url"],
        "https://stream_url.com/Tunforgiven"
    );
    assert_eq!(json["directive"]["stream"]["offset_ms"], 0);
}

/// Test album playback followed by renderer pre-buffering
#[tokio::test]
async fn test_album_then_nearly_finished() {
    let app = create_test_app(vec![]);

    let (_, json) = post_voice(
        &app,
        intent("Album", json!({ "albumName": "The Prodigy The Fat of the Land" })),
    )
    .await;
    assert_eq!(
        json["speech"],
        "Playing album The Fat of the Land by The Prodigy"
    );
    assert_eq!(json["directive"]["stream"]["token"], "T1");

    let (status, json) = post_voice(&app, event("PlaybackNearlyFinished")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("speech").is_none());
    assert_eq!(json["directive"]["mode"]["behavior"], "ENQUEUE_AFTER");
    assert_eq!(json["directive"]["mode"]["previous_token"], "T1");
    assert_eq!(json["directive"]["stream"]["token"], "T2");

    // Last track: renderer finishes on its own
    let (status, json) = post_voice(&app, event("PlaybackNearlyFinished")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

/// Test song that the catalog does not know
#[tokio::test]
async fn test_song_not_found() {
    let app = create_test_app(vec![]);

    let (status, json) = post_voice(
        &app,
        intent("SingleSong", json!({ "song": "Nobody Nothing" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["speech"],
        "Sorry, I couldn't find a song by request Nobody Nothing"
    );
    assert!(json.get("directive").is_none());
}

/// Test navigation before anything was played
#[tokio::test]
async fn test_next_on_empty_queue() {
    let app = create_test_app(vec![]);

    let (_, json) = post_voice(&app, intent("AMAZON.NextIntent", json!({}))).await;

    assert_eq!(
        json["speech"],
        "Sorry, I couldn't play next song because the track list is empty"
    );
}

/// Test stop then next resumes within the retained list
#[tokio::test]
async fn test_stop_then_next() {
    let app = create_test_app(vec![]);

    post_voice(
        &app,
        intent("Album", json!({ "albumName": "The Prodigy The Fat of the Land" })),
    )
    .await;

    let (_, json) = post_voice(&app, intent("AMAZON.CancelIntent", json!({}))).await;
    assert_eq!(json, json!({ "directive": { "type": "Stop" } }));

    let (_, json) = post_voice(&app, intent("AMAZON.NextIntent", json!({}))).await;
    assert_eq!(json["speech"], "Playing Breathe by The Prodigy");
}

/// Test unknown intent asks again
#[tokio::test]
async fn test_unrecognized_intent() {
    let app = create_test_app(vec![]);

    let (status, json) = post_voice(&app, intent("SomeWrongIntent", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["speech"], "Sorry, I didn't get that.");
    assert_eq!(json["should_end_session"], false);
}

/// Test observational renderer events produce null
#[tokio::test]
async fn test_observational_events() {
    let app = create_test_app(vec![]);

    for kind in ["PlaybackStarted", "PlaybackStopped", "PlaybackFinished"] {
        let (status, json) = post_voice(&app, event(kind)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.is_null(), "{} should produce no response", kind);
    }

    let (status, json) = post_voice(
        &app,
        envelope(json!({
            "type": "PlaybackFailed",
            "request_id": "req-failed",
            "error": { "type": "MEDIA_ERROR_UNKNOWN", "message": "decoder gave up" },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

/// Test voice session end does not stop playback
#[tokio::test]
async fn test_session_ended_request_keeps_queue() {
    let app = create_test_app(vec![]);

    post_voice(
        &app,
        intent("Album", json!({ "albumName": "The Prodigy The Fat of the Land" })),
    )
    .await;

    let (status, json) = post_voice(
        &app,
        envelope(json!({
            "type": "SessionEndedRequest",
            "request_id": "req-ended",
            "reason": "USER_INITIATED",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());

    let (_, json) = post_voice(&app, event("PlaybackNearlyFinished")).await;
    assert_eq!(json["directive"]["stream"]["token"], "T2");
}

/// Test DELETE /api/session deactivates the queue
#[tokio::test]
async fn test_delete_session() {
    let app = create_test_app(vec![]);

    post_voice(
        &app,
        intent("Album", json!({ "albumName": "The Prodigy The Fat of the Land" })),
    )
    .await;

    let request = Request::builder()
        .uri("/api/session")
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, json) = post_voice(&app, event("PlaybackNearlyFinished")).await;
    assert!(json.is_null());
}

/// Test application allow-list
#[tokio::test]
async fn test_unknown_application_forbidden() {
    let app = create_test_app(vec!["amzn1.echo-sdk-ams.app.other".to_string()]);

    let (status, json) = post_voice(
        &app,
        envelope(json!({ "type": "LaunchRequest", "request_id": "req-launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], fixtures::APPLICATION_ID);
}

/// Test allow-listed application is accepted
#[tokio::test]
async fn test_known_application_accepted() {
    let app = create_test_app(vec![fixtures::APPLICATION_ID.to_string()]);

    let (status, _) = post_voice(
        &app,
        envelope(json!({ "type": "LaunchRequest", "request_id": "req-launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

/// Test malformed envelope is rejected by the extractor
#[tokio::test]
async fn test_malformed_envelope() {
    let app = create_test_app(vec![]);

    let request = Request::builder()
        .uri("/api/voice")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"request": {"type": "Bogus"}}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
