use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segue/config.toml` or `~/.config/segue/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGUE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub chat: ChatSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            chat: ChatSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// MIME types accepted for ingestion (case-insensitive).
    pub mime_types: Vec<String>,
    /// File extensions accepted when a file carries no MIME type
    /// (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Title used when a file name normalizes down to nothing.
    pub placeholder_title: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            mime_types: vec![
                "audio/mpeg".into(),
                "audio/wav".into(),
                "audio/mp3".into(),
                "audio/x-m4a".into(),
                "audio/aac".into(),
                "audio/flac".into(),
                "audio/ogg".into(),
            ],
            extensions: vec![
                "mp3".into(),
                "wav".into(),
                "m4a".into(),
                "aac".into(),
                "flac".into(),
                "ogg".into(),
            ],
            placeholder_title: "Untitled track".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// The agent message that opens a fresh conversation log.
    pub greeting: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            greeting: "Hey! Load up some tracks and ask me anything about the set.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How many decorative waveform bars the shell renders per track.
    pub waveform_bars: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { waveform_bars: 32 }
    }
}
