use super::intent::{Intent, classify};
use super::model::{ChatLog, Role};
use super::respond::{NO_TRACKS_REPLY, respond};
use crate::insight::{Tempo, TrackInsight, insight_seed};
use crate::library::TrackId;

fn insight(title: &str, tempo: Tempo, moods: &[&str], duration: Option<f64>) -> TrackInsight {
    TrackInsight {
        id: TrackId::new(),
        title: title.to_string(),
        duration,
        size: 1000,
        tempo,
        moods: moods.iter().map(|m| m.to_string()).collect(),
        seed: insight_seed(title, duration),
    }
}

#[test]
fn classify_matches_each_keyword_set_case_insensitively() {
    assert_eq!(classify("Give me a SUMMARY please"), Intent::Summary);
    assert_eq!(classify("what order should these go in?"), Intent::Playlist);
    assert_eq!(classify("what's the vibe of this set"), Intent::Vibe);
    assert_eq!(classify("how do I mix these together"), Intent::Transition);
}

#[test]
fn classify_breaks_ties_by_intent_order() {
    // Touches both the summary and vibe keyword sets; summary is checked first.
    assert_eq!(classify("summarize the vibe"), Intent::Summary);
    // Touches playlist and transition; playlist wins.
    assert_eq!(classify("sort these for a smooth mix"), Intent::Playlist);
}

#[test]
fn classify_falls_back_to_overview() {
    assert_eq!(classify("hello?"), Intent::Overview);
    assert_eq!(classify(""), Intent::Overview);
    assert_eq!(classify("何か面白いことある?"), Intent::Overview);
}

#[test]
fn empty_library_always_gets_the_fixed_reply() {
    for question in ["summary", "order", "vibe", "flow", "anything at all", ""] {
        assert_eq!(respond(question, &[]), NO_TRACKS_REPLY);
    }
}

#[test]
fn summary_names_count_total_and_dominant_mood() {
    // Scenario: two tracks share "dreamy", so it dominates.
    let set = vec![
        insight("First Light", Tempo::Low, &["dreamy", "upbeat"], Some(100.0)),
        insight("After Hours", Tempo::Mid, &["dreamy", "dark"], Some(85.0)),
    ];

    let reply = respond("give me a summary", &set);
    assert!(reply.contains("2 tracks"), "reply was: {reply}");
    assert!(reply.contains("3:05"), "reply was: {reply}");
    assert!(reply.contains("The dominant mood is dreamy."), "reply was: {reply}");
}

#[test]
fn summary_reports_mood_ties_in_first_seen_order() {
    let set = vec![
        insight("A", Tempo::Low, &["upbeat"], None),
        insight("B", Tempo::Low, &["dark"], None),
    ];

    let reply = respond("recap", &set);
    assert!(
        reply.contains("The dominant moods are upbeat and dark."),
        "reply was: {reply}"
    );
}

#[test]
fn playlist_sorts_low_to_high_and_is_stable_within_a_bucket() {
    let set = vec![
        insight("Heavy", Tempo::High, &["dark"], None),
        insight("Slow One", Tempo::Low, &["dreamy"], None),
        insight("Middle", Tempo::Mid, &["hazy"], None),
        insight("Slow Two", Tempo::Low, &["glacial"], None),
    ];

    let reply = respond("build me a playlist", &set);
    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines[1], "1. Slow One (low)");
    assert_eq!(lines[2], "2. Slow Two (low)");
    assert_eq!(lines[3], "3. Middle (mid)");
    assert_eq!(lines[4], "4. Heavy (high)");
}

#[test]
fn vibe_lists_every_title_with_its_moods() {
    let set = vec![
        insight("First Light", Tempo::Low, &["dreamy", "upbeat"], None),
        insight("After Hours", Tempo::Mid, &["dark"], None),
    ];

    let reply = respond("what's the mood here", &set);
    assert!(reply.contains("- First Light: dreamy, upbeat"), "reply was: {reply}");
    assert!(reply.contains("- After Hours: dark"), "reply was: {reply}");
}

#[test]
fn transitions_call_out_matched_and_mismatched_energy() {
    let set = vec![
        insight("A", Tempo::Mid, &["hazy"], None),
        insight("B", Tempo::Mid, &["hazy"], None),
        insight("C", Tempo::High, &["driving"], None),
        insight("D", Tempo::Low, &["glacial"], None),
    ];

    let reply = respond("plan the flow", &set);
    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("matching energy"), "line was: {}", lines[1]);
    assert!(lines[2].contains("energy rises"), "line was: {}", lines[2]);
    assert!(lines[3].contains("energy drops"), "line was: {}", lines[3]);
}

#[test]
fn single_track_transition_request_still_answers() {
    let set = vec![insight("Solo", Tempo::Low, &["dreamy"], None)];
    let reply = respond("how does it flow", &set);
    assert!(!reply.is_empty());
}

#[test]
fn unmatched_questions_get_the_overview_not_an_error() {
    let set = vec![
        insight("First Light", Tempo::Low, &["dreamy"], None),
        insight("After Hours", Tempo::Mid, &["dark"], None),
    ];

    let reply = respond("??", &set);
    assert!(reply.contains("2 tracks"), "reply was: {reply}");
    assert!(reply.contains("First Light"), "reply was: {reply}");
    assert!(reply.contains("After Hours"), "reply was: {reply}");
}

#[test]
fn every_intent_renders_non_empty_text() {
    let set = vec![
        insight("A", Tempo::Low, &["dreamy"], Some(60.0)),
        insight("B", Tempo::High, &["dark"], Some(120.0)),
    ];

    for question in ["summary", "order these", "vibe check", "mix it", "???"] {
        assert!(!respond(question, &set).is_empty(), "empty reply for {question:?}");
    }
}

#[test]
fn ask_appends_exactly_one_user_and_one_agent_turn() {
    let mut log = ChatLog::new();
    let set = vec![insight("A", Tempo::Low, &["dreamy"], None)];

    let reply = log.ask("vibe?", &set).clone();
    assert_eq!(reply.role, Role::Agent);
    assert_eq!(log.len(), 2);
    assert_eq!(log.messages()[0].role, Role::User);
    assert_eq!(log.messages()[0].content, "vibe?");
    assert_eq!(log.messages()[1], reply);

    log.ask("and a summary?", &set);
    assert_eq!(log.len(), 4);
}

#[test]
fn log_ids_and_timestamps_are_monotonic() {
    let mut log = ChatLog::with_greeting("hello");
    assert_eq!(log.len(), 1);
    assert_eq!(log.messages()[0].role, Role::Agent);
    assert_eq!(log.messages()[0].content, "hello");

    log.ask("one", &[]);
    log.ask("two", &[]);

    let msgs = log.messages();
    for pair in msgs.windows(2) {
        assert!(pair[0].id < pair[1].id);
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

#[test]
fn empty_library_reply_is_returned_through_the_log_too() {
    let mut log = ChatLog::new();
    let reply = log.ask("what do you see?", &[]);
    assert_eq!(reply.content, NO_TRACKS_REPLY);
}
