//! Responses returned to the voice front end

use serde::{Deserialize, Serialize};
use tonearm_core::Directive;

pub const WELCOME_TEXT: &str = "Welcome to Tonearm.";
pub const CHOOSE_THE_MUSIC_REQUEST: &str =
    "Say 'play' or 'play album' and then name the artist and the title.";
pub const WRONG_REQUEST: &str = "Sorry, I didn't get that.";
pub const ERROR: &str = "Sorry, something went wrong. Please try again.";

/// Reply to one voice turn or renderer event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Text to speak
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,

    /// Text spoken when the user stays silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<Directive>,

    /// `None` leaves the decision to the front end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl SessionResponse {
    /// "Playing {item} by {artist}" plus the directive
    pub fn play(item: &str, artist: &str, directive: Directive) -> Self {
        Self {
            speech: Some(format!("Playing {} by {}", item, artist)),
            reprompt: None,
            directive: Some(directive),
            should_end_session: Some(true),
        }
    }

    /// Question that keeps the session open, with the standard reprompt
    pub fn ask(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: Some(CHOOSE_THE_MUSIC_REQUEST.to_string()),
            directive: None,
            should_end_session: Some(false),
        }
    }

    /// Statement that closes the session
    pub fn tell(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: None,
            directive: None,
            should_end_session: Some(true),
        }
    }

    pub fn stop() -> Self {
        Self::directive_only(Directive::Stop)
    }

    /// Bare directive, used for renderer-triggered pre-buffering
    pub fn directive_only(directive: Directive) -> Self {
        Self {
            directive: Some(directive),
            ..Self::default()
        }
    }

    pub fn song_not_found(query: &str) -> Self {
        Self::tell(format!("Sorry, I couldn't find a song by request {}", query))
    }

    pub fn album_not_found(query: &str) -> Self {
        Self::tell(format!("Sorry, I couldn't find an album by request {}", query))
    }

    /// `direction` is "next" or "previous"
    pub fn empty_list(direction: &str) -> Self {
        Self::tell(format!(
            "Sorry, I couldn't play {} song because the track list is empty",
            direction
        ))
    }
}
