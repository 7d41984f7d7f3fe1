//! Intent name + slot map → `Command`

use std::collections::HashMap;
use tonearm_core::Command;

pub const SINGLE_SONG_INTENT: &str = "SingleSong";
pub const SONG_SLOT: &str = "song";
pub const ALBUM_INTENT: &str = "Album";
pub const ALBUM_SLOT: &str = "albumName";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const NEXT_INTENT: &str = "AMAZON.NextIntent";
pub const PREVIOUS_INTENT: &str = "AMAZON.PreviousIntent";

/// Maps recognized intents to commands
///
/// Pure: the same intent and slots always give the same command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    /// Interpret one voice turn
    ///
    /// A known intent that is missing its required slot (or has a blank one)
    /// is treated as unrecognized.
    pub fn interpret(name: &str, slots: &HashMap<String, String>) -> Command {
        let unrecognized = || Command::Unrecognized {
            raw_name: name.to_string(),
        };

        match name {
            SINGLE_SONG_INTENT => match slot(slots, SONG_SLOT) {
                Some(query) => Command::PlaySong { query },
                None => unrecognized(),
            },
            ALBUM_INTENT => match slot(slots, ALBUM_SLOT) {
                Some(query) => Command::PlayAlbum { query },
                None => unrecognized(),
            },
            STOP_INTENT | CANCEL_INTENT => Command::Stop,
            NEXT_INTENT => Command::Next,
            PREVIOUS_INTENT => Command::Previous,
            _ => unrecognized(),
        }
    }
}

fn slot(slots: &HashMap<String, String>, key: &str) -> Option<String> {
    slots
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
