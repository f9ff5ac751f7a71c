//! Match records and the round-number convention that encodes bracket segments.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = String;

/// Last winners-bracket round; losers round N is stored as N + 99.
pub const LOSERS_ROUND_OFFSET: i32 = 99;
/// Round number reserved for the single grand-final match.
pub const GRAND_FINAL_ROUND: i32 = 1000;

/// Bracket segment a round number belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Winners bracket round N (stored round `< 100`).
    Winners(i32),
    /// Losers bracket round N (stored round `100..=999`, N = round - 99).
    Losers(i32),
    GrandFinal,
    /// Anything past the grand final; never counted toward a segment.
    Unclassified(i32),
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundKind::Winners(n) => write!(f, "W{}", n),
            RoundKind::Losers(n) => write!(f, "L{}", n),
            RoundKind::GrandFinal => write!(f, "GF"),
            RoundKind::Unclassified(n) => write!(f, "R{}", n),
        }
    }
}

/// Classify a stored round number into its bracket segment.
pub fn classify_round(round: i32) -> RoundKind {
    if round <= LOSERS_ROUND_OFFSET {
        RoundKind::Winners(round)
    } else if round < GRAND_FINAL_ROUND {
        RoundKind::Losers(round - LOSERS_ROUND_OFFSET)
    } else if round == GRAND_FINAL_ROUND {
        RoundKind::GrandFinal
    } else {
        RoundKind::Unclassified(round)
    }
}

/// A single bout between at most two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub round: i32,
    /// Slot within the round; display ordering only.
    #[serde(default)]
    pub position: i32,
    /// None while the slot awaits a feeder match.
    #[serde(default)]
    pub participant1_id: Option<PlayerId>,
    #[serde(default)]
    pub participant2_id: Option<PlayerId>,
    /// None if not yet played.
    #[serde(default)]
    pub winner_participant_id: Option<PlayerId>,
}

impl Match {
    pub fn new(
        round: i32,
        position: i32,
        participant1_id: Option<PlayerId>,
        participant2_id: Option<PlayerId>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            round,
            position,
            participant1_id,
            participant2_id,
        )
    }

    pub fn with_id(
        id: impl Into<MatchId>,
        round: i32,
        position: i32,
        participant1_id: Option<PlayerId>,
        participant2_id: Option<PlayerId>,
    ) -> Self {
        Self {
            id: id.into(),
            round,
            position,
            participant1_id,
            participant2_id,
            winner_participant_id: None,
        }
    }

    /// Record the winner (builder style, for fixtures and snapshots assembled in code).
    pub fn with_winner(mut self, winner: impl Into<PlayerId>) -> Self {
        self.winner_participant_id = Some(winner.into());
        self
    }

    pub fn kind(&self) -> RoundKind {
        classify_round(self.round)
    }

    pub fn participant1(&self) -> Option<&str> {
        filled(&self.participant1_id)
    }

    pub fn participant2(&self) -> Option<&str> {
        filled(&self.participant2_id)
    }

    pub fn winner(&self) -> Option<&str> {
        filled(&self.winner_participant_id)
    }

    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }

    /// Number of populated participant slots (0, 1 or 2).
    pub fn participant_count(&self) -> usize {
        usize::from(self.participant1().is_some()) + usize::from(self.participant2().is_some())
    }

    pub fn has_participant(&self, player_id: &str) -> bool {
        self.participant1() == Some(player_id) || self.participant2() == Some(player_id)
    }

    /// True when the match is decided, the player took part, and someone else won.
    pub fn lost(&self, player_id: &str) -> bool {
        match self.winner() {
            Some(winner) => self.has_participant(player_id) && winner != player_id,
            None => false,
        }
    }

    pub fn won(&self, player_id: &str) -> bool {
        self.winner() == Some(player_id)
    }
}

/// Upstream rows sometimes carry empty strings instead of nulls; both mean "unset".
fn filled(slot: &Option<PlayerId>) -> Option<&str> {
    slot.as_deref().filter(|id| !id.is_empty())
}
