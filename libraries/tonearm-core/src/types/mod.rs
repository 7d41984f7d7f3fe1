mod command;
mod directive;
mod event;
mod ids;
mod track;

pub use command::Command;
pub use directive::{AudioStream, Directive, PlayMode};
pub use event::{PlaybackFailure, RendererEvent};
pub use ids::{AlbumId, TrackId};
pub use track::{AlbumSummary, StreamQuality, Track};
