//! External capability seam: media handles, resource allocation and the
//! duration probe.
//!
//! The embedding shell owns the real mechanics (object URLs, media elements,
//! metadata probing); this core only tracks lifecycles and issues
//! best-effort play/pause requests through these traits.

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// Errors a media handle may report for a play/pause request.
///
/// Callers in this crate treat them as advisory: they are logged and
/// swallowed, never propagated.
#[derive(Debug, Error)]
pub enum HandleError {
    /// The handle is no longer backed by a live resource.
    #[error("media handle is no longer backed by a live resource")]
    Stale,
    /// The platform refused the request (e.g. an autoplay policy).
    #[error("playback request rejected: {0}")]
    Rejected(String),
}

/// An opaque playable media resource supplied by the shell.
pub trait MediaHandle {
    /// Request playback to start. The request may settle later, or not at
    /// all; callers must not depend on its completion.
    fn play(&self) -> Result<(), HandleError>;
    /// Request playback to pause. Same contract as [`MediaHandle::play`].
    fn pause(&self) -> Result<(), HandleError>;
    /// Observed playing/paused status of the underlying resource.
    fn is_playing(&self) -> bool;
}

/// One file offered for ingestion.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Original file name, extension included.
    pub name: String,
    /// MIME type as reported by the source; may be empty.
    pub mime_type: String,
    /// Size of the source in bytes.
    pub byte_size: u64,
    /// Raw content, passed through to the resource layer untouched.
    pub bytes: Vec<u8>,
}

impl FileDescriptor {
    /// Descriptor for in-memory content; `byte_size` follows `bytes`.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            byte_size: bytes.len() as u64,
            bytes,
        }
    }
}

/// Allocates and revokes playable handles for ingested files.
///
/// Every handle acquired through this trait is released exactly once by its
/// owner; a leaked or double-released handle is a defect on the caller side.
pub trait MediaResources {
    fn acquire(&self, file: &FileDescriptor) -> Arc<dyn MediaHandle>;
    fn release(&self, handle: Arc<dyn MediaHandle>);
}

/// Asynchronous duration probe over a media handle.
pub trait DurationProbe {
    /// Resolve the duration in seconds, or `None` when probing fails.
    /// Implementations must resolve (not hang) and must not panic.
    fn probe(&self, handle: Arc<dyn MediaHandle>) -> LocalBoxFuture<'_, Option<f64>>;
}
