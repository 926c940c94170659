use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::config::LibrarySettings;
use crate::insight::{TrackInsight, synthesize};
use crate::media::{DurationProbe, FileDescriptor, MediaResources};

use super::ingest::{is_supported, title_from_file_name};
use super::model::{Track, TrackId};

/// Ordered collection of ingested tracks, newest batch first.
///
/// The store owns every media handle it acquires and releases each exactly
/// once: on [`TrackStore::remove`] or when the store itself is dropped.
pub struct TrackStore {
    tracks: Vec<Track>,
    resources: Arc<dyn MediaResources>,
    settings: LibrarySettings,
}

impl TrackStore {
    pub fn new(resources: Arc<dyn MediaResources>, settings: LibrarySettings) -> Self {
        Self {
            tracks: Vec::new(),
            resources,
            settings,
        }
    }

    /// Ingest a batch of files.
    ///
    /// Unsupported kinds are skipped silently and never block the rest of
    /// the batch. Durations are probed concurrently, one probe per accepted
    /// file, and the batch lands in the store only once every probe has
    /// settled, with the original file order preserved. Returns the new
    /// ids, in batch order.
    pub async fn ingest_batch(
        &mut self,
        files: Vec<FileDescriptor>,
        probe: &dyn DurationProbe,
    ) -> Vec<TrackId> {
        let mut accepted = Vec::new();
        for file in files {
            if is_supported(&file, &self.settings) {
                let handle = self.resources.acquire(&file);
                accepted.push((file, handle));
            } else {
                debug!(name = %file.name, mime = %file.mime_type, "skipping unsupported file");
            }
        }

        let probes: Vec<_> = accepted
            .iter()
            .map(|(_, handle)| probe.probe(handle.clone()))
            .collect();
        let durations = join_all(probes).await;

        let mut batch = Vec::with_capacity(accepted.len());
        for ((file, handle), duration) in accepted.into_iter().zip(durations) {
            if duration.is_none() {
                debug!(name = %file.name, "duration probe came back empty");
            }
            let id = TrackId::new();
            let title = title_from_file_name(&file.name, &self.settings.placeholder_title);
            let insight = synthesize(id, &title, duration, file.byte_size);
            batch.push(Track {
                id,
                title,
                size: file.byte_size,
                duration,
                handle,
                insight,
            });
        }

        let ids: Vec<TrackId> = batch.iter().map(|t| t.id).collect();
        // Newest batch first; order inside the batch stays as received.
        self.tracks.splice(0..0, batch);
        ids
    }

    /// Remove a track and release its handle. Returns false for unknown ids.
    pub fn remove(&mut self, id: &TrackId) -> bool {
        match self.tracks.iter().position(|t| &t.id == id) {
            Some(at) => {
                let track = self.tracks.remove(at);
                debug!(track = %track.id, title = %track.title, "removing track");
                self.resources.release(track.handle);
                true
            }
            None => false,
        }
    }

    /// All tracks, newest batch first.
    pub fn all(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Snapshot of every track's insight, in store order.
    pub fn insights(&self) -> Vec<TrackInsight> {
        self.tracks.iter().map(|t| t.insight.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Drop for TrackStore {
    /// Teardown releases every handle still owned by the store.
    fn drop(&mut self) {
        for track in self.tracks.drain(..) {
            self.resources.release(track.handle);
        }
    }
}
