use crate::config::LibrarySettings;
use crate::media::FileDescriptor;

/// True when the descriptor passes the MIME allow-list, or the extension
/// allow-list when no MIME type came with the file.
///
/// A present-but-unknown MIME type is a rejection; the extension fallback
/// only applies to files that arrived with no type at all.
pub(super) fn is_supported(file: &FileDescriptor, settings: &LibrarySettings) -> bool {
    if !file.mime_type.is_empty() {
        let mime = file.mime_type.trim().to_ascii_lowercase();
        return settings
            .mime_types
            .iter()
            .map(|m| m.trim().to_ascii_lowercase())
            .any(|m| m == mime);
    }

    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    file_extension(&file.name)
        .map(|ext| exts.iter().any(|e| e == &ext))
        .unwrap_or(false)
}

fn file_extension(name: &str) -> Option<String> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            Some(ext.to_ascii_lowercase())
        }
        _ => None,
    }
}

/// Derive the display title from a file name: extension stripped, `_`/`-`
/// separators turned into spaces, whitespace collapsed. A name that
/// normalizes down to nothing falls back to `placeholder`.
pub fn title_from_file_name(name: &str, placeholder: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };

    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let title = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    if title.is_empty() {
        placeholder.to_string()
    } else {
        title
    }
}
