//! Playable-match frontier and the auto-advance decision rule.

use crate::logic::analyze::DebugInfo;
use crate::models::Match;

/// Matches with both slots filled and no result: the "next to play" queue, in input order.
pub fn playable_matches(matches: &[Match]) -> Vec<Match> {
    matches.iter().filter(|m| is_playable(m)).cloned().collect()
}

/// Undecided matches with exactly one slot filled (byes, or awaiting a feeder match).
pub fn single_participant_matches(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| is_single_participant(m))
        .cloned()
        .collect()
}

pub fn is_playable(m: &Match) -> bool {
    !m.is_decided() && m.participant_count() == 2
}

pub fn is_single_participant(m: &Match) -> bool {
    !m.is_decided() && m.participant_count() == 1
}

/// Whether the caller should trigger the external auto-advance mutation and re-analyze afterwards.
pub fn auto_advance_needed(info: &DebugInfo) -> bool {
    !info.single_participant_matches.is_empty()
}
