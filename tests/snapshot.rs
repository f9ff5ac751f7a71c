//! Integration tests for loading snapshots from JSON.

use bracket_debugger::{analyze_snapshot, BracketType, Snapshot, SnapshotError};

const SNAPSHOT: &str = r#"{
    "tournament": { "id": "t1", "name": "Friday Night", "bracket_type": "double" },
    "players": [
        { "id": "A", "name": "Alice" },
        { "id": "B", "name": "Bob" }
    ],
    "matches": [
        { "id": "m1", "round": 1, "position": 1,
          "participant1_id": "A", "participant2_id": "B", "winner_participant_id": "A" },
        { "id": "m2", "round": 100, "participant1_id": "B", "participant2_id": null },
        { "id": "gf", "round": 1000, "position": 1 }
    ]
}"#;

#[test]
fn loads_rows_with_missing_optional_fields() {
    let snapshot = Snapshot::from_json_str(SNAPSHOT).unwrap();
    assert_eq!(snapshot.tournament.bracket_type, BracketType::Double);
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.matches[1].position, 0);
    assert_eq!(snapshot.matches[2].participant1_id, None);

    let info = analyze_snapshot(&snapshot);
    assert_eq!(info.winners_champion.as_deref(), Some("A"));
    assert_eq!(info.auto_advance_count(), 1);
    let messages: Vec<String> = info.blocking_issues.iter().map(|i| i.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Losers bracket has 1 match(es) waiting for participants from earlier rounds",
            "Losers bracket must be completed before the grand final opponent is known",
            "Grand final match exists but is not populated yet",
        ]
    );
}

#[test]
fn unknown_bracket_type_loads_as_other() {
    let snapshot =
        Snapshot::from_json_str(r#"{ "tournament": { "bracket_type": "swiss" } }"#).unwrap();
    assert_eq!(snapshot.tournament.bracket_type, BracketType::Other);
    assert!(snapshot.players.is_empty());
    assert!(analyze_snapshot(&snapshot).blocking_issues.is_empty());
}

#[test]
fn reader_and_parse_errors_are_distinguished() {
    let err = Snapshot::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
    assert!(err.to_string().starts_with("Invalid snapshot"));

    let ok = Snapshot::from_reader(SNAPSHOT.as_bytes()).unwrap();
    assert_eq!(ok.matches.len(), 3);

    let invalid_utf8: &[u8] = &[b'{', 0xff, 0xfe, b'}'];
    let err = Snapshot::from_reader(invalid_utf8).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
    assert!(err.to_string().starts_with("Could not read snapshot"));
}

#[test]
fn analysis_serializes_to_json() {
    let snapshot = Snapshot::from_json_str(SNAPSHOT).unwrap();
    let json = serde_json::to_value(analyze_snapshot(&snapshot)).unwrap();
    assert_eq!(json["winners_champion"], "A");
    assert_eq!(json["losers_champion"], serde_json::Value::Null);
    assert_eq!(json["progress"], "losers_in_progress");
    assert_eq!(json["active_players"], 2);
}
