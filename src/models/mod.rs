//! Data structures for bracket analysis: players, matches, tournament snapshot.

mod game;
mod player;
mod tournament;

pub use game::{classify_round, Match, MatchId, RoundKind, GRAND_FINAL_ROUND, LOSERS_ROUND_OFFSET};
pub use player::{Player, PlayerId, PlayerRecord};
pub use tournament::{BracketType, Snapshot, SnapshotError, Tournament, TournamentId};
