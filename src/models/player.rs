//! Player and PlayerRecord data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = String;

/// A tournament entrant.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Win/loss view of a player derived from the match list (for display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub eliminated: bool,
}
