//! Bracket debugger: derives double-elimination bracket state from a match snapshot.

pub mod logic;
pub mod models;

pub use logic::{
    analyze, analyze_snapshot, auto_advance_needed, blocking_issues, eliminated_players,
    elimination_threshold, find_grand_final, is_eliminated, is_playable, is_single_participant,
    losers_champion, loss_count, player_records, playable_matches, single_participant_matches,
    win_count, winners_champion, BlockingIssue, BracketProgress, DebugInfo,
};
pub use models::{
    classify_round, BracketType, Match, MatchId, Player, PlayerId, PlayerRecord, RoundKind,
    Snapshot, SnapshotError, Tournament, TournamentId, GRAND_FINAL_ROUND,
};
