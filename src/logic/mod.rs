//! Bracket state derivation: champions, frontier, elimination, blocking issues.

mod analyze;
mod champions;
mod elimination;
mod frontier;
mod issues;

pub use analyze::{analyze, analyze_snapshot, BracketProgress, DebugInfo};
pub use champions::{find_grand_final, losers_champion, winners_champion};
pub use elimination::{
    eliminated_players, elimination_threshold, is_eliminated, loss_count, player_records, win_count,
};
pub use frontier::{
    auto_advance_needed, is_playable, is_single_participant, playable_matches,
    single_participant_matches,
};
pub use issues::{blocking_issues, BlockingIssue};
