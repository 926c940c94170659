use std::sync::Arc;

use tracing::debug;

use crate::library::TrackId;
use crate::media::{HandleError, MediaHandle};

/// Single-active-track playback state machine.
///
/// The coordinator records the id it most recently asked to play and never
/// waits on the underlying media requests: a play that the platform later
/// rejects leaves the record in place, and the mismatch heals on the next
/// toggle of the same track. What it does guarantee is ordering: a new
/// handle is never asked to play before the previous one was asked to
/// pause.
pub struct PlaybackCoordinator {
    active: Option<(TrackId, Arc<dyn MediaHandle>)>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Id of the track last asked to play, if any.
    pub fn active_track(&self) -> Option<&TrackId> {
        self.active.as_ref().map(|(id, _)| id)
    }

    /// Handle a play/pause press on `id`.
    ///
    /// One call is one atomic transition of the state machine; the play and
    /// pause requests it issues are fire-and-forget.
    pub fn toggle(&mut self, id: TrackId, handle: Arc<dyn MediaHandle>) {
        match self.active.take() {
            None => {
                debug!(track = %id, "starting playback");
                request(handle.play());
                self.active = Some((id, handle));
            }
            Some((current, current_handle)) if current == id => {
                // Reconcile against what the handle reports rather than our
                // own record; the shell may have paused it behind our back.
                if current_handle.is_playing() {
                    debug!(track = %id, "pausing playback");
                    request(current_handle.pause());
                } else {
                    debug!(track = %id, "resuming drifted playback");
                    request(current_handle.play());
                    self.active = Some((current, current_handle));
                }
            }
            Some((previous, previous_handle)) => {
                debug!(from = %previous, to = %id, "switching playback");
                request(previous_handle.pause());
                request(handle.play());
                self.active = Some((id, handle));
            }
        }
    }

    /// Teardown transition: best-effort pause of the active handle, back to
    /// idle.
    pub fn stop(&mut self) {
        if let Some((id, handle)) = self.active.take() {
            debug!(track = %id, "stopping playback");
            request(handle.pause());
        }
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// Media requests are best-effort: the handle may already be gone or the
// platform may refuse. Log and move on.
fn request(result: Result<(), HandleError>) {
    if let Err(err) = result {
        debug!(error = %err, "media request ignored");
    }
}
