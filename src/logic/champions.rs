//! Grand final lookup and per-segment champion detection.

use crate::models::{Match, PlayerId, RoundKind};

/// The grand-final match, if the bracket generator has created one.
pub fn find_grand_final(matches: &[Match]) -> Option<&Match> {
    matches.iter().find(|m| m.kind() == RoundKind::GrandFinal)
}

/// Winner of the decided winners-bracket match with the highest round.
pub fn winners_champion(matches: &[Match]) -> Option<PlayerId> {
    segment_champion(matches, |kind| matches!(kind, RoundKind::Winners(_)))
}

/// Winner of the decided losers-bracket match with the highest round.
pub fn losers_champion(matches: &[Match]) -> Option<PlayerId> {
    segment_champion(matches, |kind| matches!(kind, RoundKind::Losers(_)))
}

/// No decided match in the segment means no champion.
/// Ties at the top round keep the earliest match in input order.
fn segment_champion(matches: &[Match], in_segment: impl Fn(RoundKind) -> bool) -> Option<PlayerId> {
    let mut top: Option<&Match> = None;
    for m in matches
        .iter()
        .filter(|m| m.is_decided() && in_segment(m.kind()))
    {
        if top.map_or(true, |t| m.round > t.round) {
            top = Some(m);
        }
    }
    top.and_then(Match::winner).map(str::to_owned)
}
