use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::insight::TrackInsight;
use crate::media::MediaHandle;

/// Opaque, stable identifier assigned to a track at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(Uuid);

impl TrackId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One uploaded file and everything owned on its behalf.
///
/// Only `duration` ever changes after creation (absent to present, once,
/// before the batch becomes visible); the handle is released by the store
/// when the track goes away.
pub struct Track {
    pub id: TrackId,
    /// Human-readable name derived from the file name.
    pub title: String,
    /// Source size in bytes.
    pub size: u64,
    /// Probed duration in seconds; `None` when probing failed.
    pub duration: Option<f64>,
    /// Playable media resource backing this track.
    pub handle: Arc<dyn MediaHandle>,
    /// Derived presentation metadata, created with the track.
    pub insight: TrackInsight,
}

impl fmt::Debug for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("size", &self.size)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}
