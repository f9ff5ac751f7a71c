//! Tournament, BracketType, and the Snapshot bundle handed to the analyzer.

use crate::models::game::Match;
use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::io::Read;
use uuid::Uuid;

/// Errors that can occur while loading a snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// Reading the snapshot source failed.
    Io(std::io::Error),
    /// The snapshot is not valid JSON or does not match the record shapes.
    Json(serde_json::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "Could not read snapshot: {}", e),
            SnapshotError::Json(e) => write!(f, "Invalid snapshot: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(e) => Some(e),
            SnapshotError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = String;

/// Elimination format. Changes elimination and blocking-issue rules, not round numbering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    /// One loss eliminates.
    Single,
    /// Winners + losers bracket + grand final; two losses eliminate.
    Double,
    /// Unrecognised value from upstream. Nobody is eliminated and no issues are reported.
    #[serde(other)]
    Other,
}

/// Tournament metadata the analyzer needs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub id: TournamentId,
    #[serde(default)]
    pub name: Option<String>,
    pub bracket_type: BracketType,
}

impl Tournament {
    /// Create a tournament with a fresh id and no name.
    pub fn new(bracket_type: BracketType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: None,
            bracket_type,
        }
    }

    pub fn single() -> Self {
        Self::new(BracketType::Single)
    }

    pub fn double() -> Self {
        Self::new(BracketType::Double)
    }
}

/// Immutable view of one tournament as supplied by the external store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tournament: Tournament,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Snapshot {
    pub fn new(tournament: Tournament, players: Vec<Player>, matches: Vec<Match>) -> Self {
        Self {
            tournament,
            players,
            matches,
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(s)?;
        log::trace!(
            "Loaded snapshot for tournament {:?}: {} players, {} matches",
            snapshot.tournament.id,
            snapshot.players.len(),
            snapshot.matches.len()
        );
        Ok(snapshot)
    }

    /// Read the whole source, then parse (so I/O and JSON failures are reported separately).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SnapshotError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }
}
