use std::fmt;

use serde::{Deserialize, Serialize};

use crate::library::TrackId;

use super::format::{format_duration_opt, format_size};

/// Energy bucket derived for a track. Ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Low,
    Mid,
    High,
}

impl Tempo {
    pub fn label(self) -> &'static str {
        match self {
            Tempo::Low => "low",
            Tempo::Mid => "mid",
            Tempo::High => "high",
        }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed mood vocabulary the synthesizer draws from.
///
/// The length is prime so the stride-based selection in [`synthesize`] can
/// never revisit an entry within one insight.
pub const MOODS: [&str; 7] = [
    "dreamy", "upbeat", "dark", "hazy", "driving", "glacial", "playful",
];

/// Derived, read-only view of a track used for display and querying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInsight {
    pub id: TrackId,
    pub title: String,
    /// Duration in seconds; `None` when probing failed.
    pub duration: Option<f64>,
    /// Source size in bytes.
    pub size: u64,
    pub tempo: Tempo,
    /// 1 to 3 distinct labels from [`MOODS`], deterministic order.
    pub moods: Vec<String>,
    /// Shared derivation seed; also drives the decorative waveform.
    pub seed: f64,
}

impl TrackInsight {
    /// Duration rendered as `m:ss`, or `--:--` when unknown.
    pub fn duration_display(&self) -> String {
        format_duration_opt(self.duration)
    }

    /// Size rendered human-readable (`4.0 MB`).
    pub fn size_display(&self) -> String {
        format_size(self.size)
    }
}

/// Numeric seed shared by every derived artifact of one track.
pub fn insight_seed(title: &str, duration: Option<f64>) -> f64 {
    title.chars().count() as f64 + duration.unwrap_or(0.0)
}

// Sine-of-seed stands in for randomness: cheap, pure, and every call site
// sees the same value for the same (seed, salt) pair.
fn seeded_unit(seed: f64, salt: u64) -> f64 {
    let x = (seed + salt as f64 * 0.618).sin() * 43758.5453;
    x.fract().abs()
}

/// Derive the presentation insight for a track.
///
/// Pure and total: identical `(title, duration, size)` inputs always produce
/// the same tempo and moods, and a missing duration is derived as zero.
pub fn synthesize(id: TrackId, title: &str, duration: Option<f64>, size: u64) -> TrackInsight {
    let seed = insight_seed(title, duration);

    let tempo = match seed as u64 % 3 {
        0 => Tempo::Low,
        1 => Tempo::Mid,
        _ => Tempo::High,
    };

    // seeded_unit < 1.0, so count lands in 1..=3 and stride in 1..=6.
    let count = 1 + (seeded_unit(seed, 1) * 3.0) as usize;
    let start = (seeded_unit(seed, 2) * MOODS.len() as f64) as usize % MOODS.len();
    let stride = 1 + (seeded_unit(seed, 3) * (MOODS.len() - 1) as f64) as usize;

    let moods = (0..count)
        .map(|i| MOODS[(start + i * stride) % MOODS.len()].to_string())
        .collect();

    TrackInsight {
        id,
        title: title.to_string(),
        duration,
        size,
        tempo,
        moods,
        seed,
    }
}

/// Decorative per-track waveform bars in `[0, 1]`.
///
/// Driven by the same seed as the insight so the bar pattern stays
/// correlated with the tempo badge rendered next to it.
pub fn waveform_heights(seed: f64, bars: usize) -> Vec<f64> {
    (0..bars)
        .map(|i| {
            let phase = seed + i as f64;
            0.5 + 0.3 * phase.sin() + 0.2 * (phase * 1.7).cos()
        })
        .collect()
}
