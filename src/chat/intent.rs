/// Classified purpose of a user question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Counts, total length, dominant moods.
    Summary,
    /// A proposed running order.
    Playlist,
    /// Mood tags per track.
    Vibe,
    /// Notes on consecutive-track transitions.
    Transition,
    /// Generic fallback when nothing matched.
    Overview,
}

/// Keyword sets per intent, in matching order.
///
/// The first set with a hit wins; that order is the tie-break when a
/// question touches several sets at once.
const KEYWORDS: [(Intent, &[&str]); 4] = [
    (
        Intent::Summary,
        &["summary", "summarize", "summarise", "recap"],
    ),
    (
        Intent::Playlist,
        &["playlist", "order", "sort", "arrange", "lineup", "setlist", "set list"],
    ),
    (Intent::Vibe, &["vibe", "mood", "feel", "energy"]),
    (
        Intent::Transition,
        &["transition", "flow", "mix", "segue", "blend"],
    ),
];

/// Classify a free-text question by case-insensitive substring matching.
///
/// Never fails: unmatched input falls back to [`Intent::Overview`].
pub fn classify(question: &str) -> Intent {
    let q = question.to_lowercase();
    for (intent, words) in KEYWORDS {
        if words.iter().any(|w| q.contains(w)) {
            return intent;
        }
    }
    Intent::Overview
}
