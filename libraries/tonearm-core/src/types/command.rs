/// Interpreted voice commands
use serde::{Deserialize, Serialize};

/// A recognized voice command, produced once per voice turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Play the best match for a free-text song query
    PlaySong { query: String },

    /// Play every track of the best-matching album
    PlayAlbum { query: String },

    /// Skip forward (wraps to the first track)
    Next,

    /// Skip back (wraps to the last track)
    Previous,

    /// Stop or cancel
    Stop,

    /// Anything the interpreter could not map
    Unrecognized { raw_name: String },
}

impl Command {
    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Command::PlaySong { .. } => "play_song",
            Command::PlayAlbum { .. } => "play_album",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::Stop => "stop",
            Command::Unrecognized { .. } => "unrecognized",
        }
    }
}
