//! segue: library core for a local-track DJ assistant.
//!
//! The crate ingests locally-held audio files, derives deterministic
//! presentation insights for each track (no real signal analysis), answers
//! free-text questions about the loaded set through intent matching, and
//! coordinates playback so at most one track plays at a time.
//!
//! Rendering, file pickers and the actual media stack live in the embedding
//! shell and reach this core through the traits in [`media`]. There is no
//! network, no persistence and no CLI surface here.

pub mod app;
pub mod chat;
pub mod config;
pub mod insight;
pub mod library;
pub mod media;
pub mod playback;

pub use app::App;
pub use chat::{ChatLog, Intent, Message, NO_TRACKS_REPLY, Role, classify, respond};
pub use config::{ChatSettings, LibrarySettings, Settings, UiSettings};
pub use insight::{MOODS, Tempo, TrackInsight, synthesize, waveform_heights};
pub use library::{Track, TrackId, TrackStore, title_from_file_name};
pub use media::{DurationProbe, FileDescriptor, HandleError, MediaHandle, MediaResources};
pub use playback::PlaybackCoordinator;
