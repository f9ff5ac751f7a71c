//! Integration tests for the blocking-issue rules of double-elimination brackets.

use bracket_debugger::{analyze, BlockingIssue, Match, Tournament};

fn slot(id: Option<&str>) -> Option<String> {
    id.map(String::from)
}

fn open(id: &str, round: i32, p1: Option<&str>, p2: Option<&str>) -> Match {
    Match::with_id(id, round, 1, slot(p1), slot(p2))
}

fn decided(id: &str, round: i32, p1: &str, p2: &str, winner: &str) -> Match {
    open(id, round, Some(p1), Some(p2)).with_winner(winner)
}

fn issues(matches: &[Match]) -> Vec<BlockingIssue> {
    analyze(&Tournament::double(), &[], matches).blocking_issues
}

#[test]
fn winners_bracket_remaining_matches() {
    let found = issues(&[
        open("w1a", 1, Some("A"), Some("B")),
        open("w1b", 1, Some("C"), Some("D")),
        open("w2", 2, None, None),
    ]);
    assert_eq!(found, vec![BlockingIssue::WinnersIncomplete { remaining: 3 }]);
    assert_eq!(
        found[0].to_string(),
        "Winners bracket not finished: 3 match(es) remaining"
    );
}

#[test]
fn losers_bracket_needs_completion_once_winners_champion_known() {
    let found = issues(&[decided("w1", 1, "A", "B", "A")]);
    assert_eq!(found, vec![BlockingIssue::LosersMustComplete]);
    assert_eq!(
        found[0].to_string(),
        "Losers bracket must be completed before the grand final opponent is known"
    );
}

#[test]
fn losers_playable_reports_count_and_highest_round() {
    let found = issues(&[
        decided("w1a", 1, "A", "B", "A"),
        decided("w1b", 1, "C", "D", "C"),
        open("l1", 100, Some("B"), Some("D")),
        open("l3", 102, Some("E"), Some("F")),
    ]);
    assert_eq!(
        found,
        vec![
            BlockingIssue::LosersPlayable {
                count: 2,
                highest_round: 3
            },
            BlockingIssue::LosersMustComplete,
        ]
    );
    assert_eq!(
        found[0].to_string(),
        "Losers bracket has 2 playable match(es) (up to L3)"
    );
}

#[test]
fn single_participant_losers_match_is_pending() {
    let pending = open("l6", 105, Some("C"), None);
    let info = analyze(&Tournament::double(), &[], &[pending.clone()]);

    assert_eq!(info.single_participant_matches, vec![pending]);
    assert_eq!(
        info.blocking_issues,
        vec![BlockingIssue::LosersAwaitingParticipants { count: 1 }]
    );
}

#[test]
fn all_applicable_issues_are_reported_together() {
    let found = issues(&[
        open("w1", 1, Some("A"), Some("B")),
        open("l1", 100, Some("C"), Some("D")),
        open("l2", 101, Some("E"), None),
        open("l3", 102, None, None),
        open("gf", 1000, None, None),
    ]);
    assert_eq!(
        found,
        vec![
            BlockingIssue::WinnersIncomplete { remaining: 1 },
            BlockingIssue::LosersPlayable {
                count: 1,
                highest_round: 1
            },
            BlockingIssue::LosersAwaitingParticipants { count: 2 },
            BlockingIssue::GrandFinalNotPopulated,
        ]
    );
}

#[test]
fn grand_final_with_one_slot_is_not_reported_as_unpopulated() {
    let found = issues(&[
        decided("w1", 1, "A", "B", "A"),
        decided("l1", 100, "B", "C", "C"),
        open("gf", 1000, Some("A"), None),
    ]);
    assert!(found.is_empty());
}

#[test]
fn single_elimination_has_no_blocking_issues() {
    let matches = [
        open("w1", 1, Some("A"), Some("B")),
        open("gf", 1000, None, None),
    ];
    let info = analyze(&Tournament::single(), &[], &matches);
    assert!(info.blocking_issues.is_empty());
}

#[test]
fn issues_serialize_as_messages() {
    let json = serde_json::to_value(vec![
        BlockingIssue::GrandFinalNotPopulated,
        BlockingIssue::LosersAwaitingParticipants { count: 4 },
    ])
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            "Grand final match exists but is not populated yet",
            "Losers bracket has 4 match(es) waiting for participants from earlier rounds"
        ])
    );
}
