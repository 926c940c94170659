use std::cmp::Ordering;

use crate::insight::{TrackInsight, format_duration};

use super::intent::{Intent, classify};

/// Reply used whenever the library is empty, whatever the question was.
pub const NO_TRACKS_REPLY: &str =
    "No tracks loaded yet. Drop a few audio files in and I'll take a look.";

/// Render a reply for `question` over the current insight snapshot.
///
/// Pure function of its two inputs: no history, no clock, no other process
/// state. Always returns non-empty text.
pub fn respond(question: &str, insights: &[TrackInsight]) -> String {
    if insights.is_empty() {
        return NO_TRACKS_REPLY.to_string();
    }

    match classify(question) {
        Intent::Summary => render_summary(insights),
        Intent::Playlist => render_playlist(insights),
        Intent::Vibe => render_vibe(insights),
        Intent::Transition => render_transitions(insights),
        Intent::Overview => render_overview(insights),
    }
}

fn tracks_word(n: usize) -> &'static str {
    if n == 1 { "track" } else { "tracks" }
}

fn render_summary(insights: &[TrackInsight]) -> String {
    let total: f64 = insights.iter().filter_map(|i| i.duration).sum();
    let mut lines = vec![format!(
        "You have {} {} loaded, {} of music in total.",
        insights.len(),
        tracks_word(insights.len()),
        format_duration(total)
    )];

    let dominant = dominant_moods(insights);
    match dominant.len() {
        0 => {}
        1 => lines.push(format!("The dominant mood is {}.", dominant[0])),
        _ => lines.push(format!("The dominant moods are {}.", dominant.join(" and "))),
    }

    lines.join("\n")
}

/// Mood labels with the highest frequency across the set.
///
/// Counting keeps first-seen order, which is also how ties break.
fn dominant_moods(insights: &[TrackInsight]) -> Vec<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for mood in insights.iter().flat_map(|i| i.moods.iter()) {
        match counts.iter_mut().find(|(label, _)| *label == mood.as_str()) {
            Some(entry) => entry.1 += 1,
            None => counts.push((mood.as_str(), 1)),
        }
    }

    let Some(max) = counts.iter().map(|(_, n)| *n).max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, n)| *n == max)
        .map(|(label, _)| label)
        .collect()
}

fn render_playlist(insights: &[TrackInsight]) -> String {
    let mut ordered: Vec<&TrackInsight> = insights.iter().collect();
    // Stable sort: tracks inside one bucket keep their current order.
    ordered.sort_by_key(|i| i.tempo);

    let mut lines = vec!["Here's a low-to-high energy running order:".to_string()];
    for (n, insight) in ordered.iter().enumerate() {
        lines.push(format!("{}. {} ({})", n + 1, insight.title, insight.tempo));
    }
    lines.join("\n")
}

fn render_vibe(insights: &[TrackInsight]) -> String {
    let mut lines = vec!["Track by track, here is the vibe:".to_string()];
    for insight in insights {
        lines.push(format!("- {}: {}", insight.title, insight.moods.join(", ")));
    }
    lines.join("\n")
}

fn render_transitions(insights: &[TrackInsight]) -> String {
    if insights.len() < 2 {
        return "Only one track here, so nothing to mix yet. Load another and I'll plan the flow."
            .to_string();
    }

    let mut lines = vec!["Transition plan, in current order:".to_string()];
    for pair in insights.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let note = match a.tempo.cmp(&b.tempo) {
            Ordering::Equal => "matching energy, this blends clean",
            Ordering::Less => "energy rises here, let it build",
            Ordering::Greater => "energy drops here, give it a beat to land",
        };
        lines.push(format!(
            "{} ({}) -> {} ({}): {}.",
            a.title, a.tempo, b.title, b.tempo, note
        ));
    }
    lines.join("\n")
}

fn render_overview(insights: &[TrackInsight]) -> String {
    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    format!(
        "Here is what I see: {} {} loaded: {}.",
        insights.len(),
        tracks_word(insights.len()),
        titles.join(", ")
    )
}
