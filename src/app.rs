//! Application facade: exposes the owned model a shell drives.
//!
//! `App` wires the track store, playback coordinator and conversation log
//! together so the embedding UI talks to one object.

mod model;

pub use model::*;
