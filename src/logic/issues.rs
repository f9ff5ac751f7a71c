//! Reasons a double-elimination tournament cannot be marked complete yet.

use crate::logic::frontier::is_playable;
use crate::models::{BracketType, Match, RoundKind};
use serde::{Serialize, Serializer};
use std::fmt;

/// One diagnostic explaining why the tournament is not complete.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BlockingIssue {
    /// No winners champion and winners matches still lack a result.
    WinnersIncomplete { remaining: usize },
    /// Losers matches ready to play; `highest_round` is the losers round number (L<n>).
    LosersPlayable { count: usize, highest_round: i32 },
    /// Undecided losers matches still waiting on a feeder match.
    LosersAwaitingParticipants { count: usize },
    /// Winners champion known, losers champion not.
    LosersMustComplete,
    /// Grand-final record exists with both slots empty.
    GrandFinalNotPopulated,
}

impl fmt::Display for BlockingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockingIssue::WinnersIncomplete { remaining } => {
                write!(f, "Winners bracket not finished: {} match(es) remaining", remaining)
            }
            BlockingIssue::LosersPlayable {
                count,
                highest_round,
            } => write!(
                f,
                "Losers bracket has {} playable match(es) (up to {})",
                count,
                RoundKind::Losers(*highest_round)
            ),
            BlockingIssue::LosersAwaitingParticipants { count } => write!(
                f,
                "Losers bracket has {} match(es) waiting for participants from earlier rounds",
                count
            ),
            BlockingIssue::LosersMustComplete => write!(
                f,
                "Losers bracket must be completed before the grand final opponent is known"
            ),
            BlockingIssue::GrandFinalNotPopulated => {
                write!(f, "Grand final match exists but is not populated yet")
            }
        }
    }
}

/// Serialized as the human-readable message.
impl Serialize for BlockingIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every applicable issue, in rule order. Empty unless the bracket is double elimination.
pub fn blocking_issues(
    bracket_type: BracketType,
    matches: &[Match],
    winners_champion: Option<&str>,
    losers_champion: Option<&str>,
    grand_final: Option<&Match>,
) -> Vec<BlockingIssue> {
    let mut issues = Vec::new();
    if bracket_type != BracketType::Double {
        return issues;
    }

    if winners_champion.is_none() {
        let remaining = matches
            .iter()
            .filter(|m| matches!(m.kind(), RoundKind::Winners(_)) && !m.is_decided())
            .count();
        if remaining > 0 {
            issues.push(BlockingIssue::WinnersIncomplete { remaining });
        }
    }

    if losers_champion.is_none() {
        let losers: Vec<(&Match, i32)> = matches
            .iter()
            .filter_map(|m| match m.kind() {
                RoundKind::Losers(n) => Some((m, n)),
                _ => None,
            })
            .collect();

        let playable: Vec<i32> = losers
            .iter()
            .filter(|(m, _)| is_playable(m))
            .map(|&(_, n)| n)
            .collect();
        if let Some(&highest_round) = playable.iter().max() {
            issues.push(BlockingIssue::LosersPlayable {
                count: playable.len(),
                highest_round,
            });
        }

        let awaiting = losers
            .iter()
            .filter(|(m, _)| !m.is_decided() && m.participant_count() < 2)
            .count();
        if awaiting > 0 {
            issues.push(BlockingIssue::LosersAwaitingParticipants { count: awaiting });
        }
    }

    if winners_champion.is_some() && losers_champion.is_none() {
        issues.push(BlockingIssue::LosersMustComplete);
    }

    if grand_final.map_or(false, |gf| gf.participant_count() == 0) {
        issues.push(BlockingIssue::GrandFinalNotPopulated);
    }

    issues
}
