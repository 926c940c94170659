use std::sync::Arc;

use crate::chat::{ChatLog, Message};
use crate::config::Settings;
use crate::insight::waveform_heights;
use crate::library::{Track, TrackId, TrackStore};
use crate::media::{DurationProbe, FileDescriptor, MediaResources};
use crate::playback::PlaybackCoordinator;

/// The main application model: store, coordinator and log under one roof.
pub struct App {
    settings: Settings,
    store: TrackStore,
    playback: PlaybackCoordinator,
    chat: ChatLog,
}

impl App {
    /// Create an `App` backed by the shell's resource manager.
    ///
    /// The conversation log opens with the configured greeting.
    pub fn new(resources: Arc<dyn MediaResources>, settings: Settings) -> Self {
        let store = TrackStore::new(resources, settings.library.clone());
        let chat = ChatLog::with_greeting(&settings.chat.greeting);

        Self {
            settings,
            store,
            playback: PlaybackCoordinator::new(),
            chat,
        }
    }

    /// Ingest a batch of files; see [`TrackStore::ingest_batch`].
    pub async fn ingest(
        &mut self,
        files: Vec<FileDescriptor>,
        probe: &dyn DurationProbe,
    ) -> Vec<TrackId> {
        self.store.ingest_batch(files, probe).await
    }

    /// Answer one question with exactly one reply turn.
    pub fn ask(&mut self, question: &str) -> &Message {
        let insights = self.store.insights();
        self.chat.ask(question, &insights)
    }

    /// Play/pause press on a track. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &TrackId) {
        if let Some(track) = self.store.get(id) {
            self.playback.toggle(track.id, track.handle.clone());
        }
    }

    /// Remove a track, stopping playback first when it is the active one.
    pub fn remove(&mut self, id: &TrackId) -> bool {
        if self.playback.active_track() == Some(id) {
            self.playback.stop();
        }
        self.store.remove(id)
    }

    /// Decorative waveform bars for a track, at the configured count.
    pub fn waveform_for(&self, id: &TrackId) -> Option<Vec<f64>> {
        self.store
            .get(id)
            .map(|t| waveform_heights(t.insight.seed, self.settings.ui.waveform_bars))
    }

    pub fn tracks(&self) -> &[Track] {
        self.store.all()
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn active_track(&self) -> Option<&TrackId> {
        self.playback.active_track()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stop playback and drop the store, releasing every handle.
    pub fn shutdown(mut self) {
        self.playback.stop();
    }
}
