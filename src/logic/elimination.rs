//! Loss counting and elimination thresholds per bracket type.

use crate::models::{BracketType, Match, Player, PlayerRecord};

/// Losses that eliminate a player, or None when the bracket type is unknown.
pub fn elimination_threshold(bracket_type: BracketType) -> Option<u32> {
    match bracket_type {
        BracketType::Single => Some(1),
        BracketType::Double => Some(2),
        BracketType::Other => None,
    }
}

pub fn is_eliminated(bracket_type: BracketType, losses: u32) -> bool {
    elimination_threshold(bracket_type).map_or(false, |max| losses >= max)
}

/// Decided matches the player took part in and did not win.
pub fn loss_count(matches: &[Match], player_id: &str) -> u32 {
    saturating_u32(matches.iter().filter(|m| m.lost(player_id)).count())
}

pub fn win_count(matches: &[Match], player_id: &str) -> u32 {
    saturating_u32(matches.iter().filter(|m| m.won(player_id)).count())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Win/loss record for every player, in roster order.
pub fn player_records(
    bracket_type: BracketType,
    players: &[Player],
    matches: &[Match],
) -> Vec<PlayerRecord> {
    players
        .iter()
        .map(|p| {
            let losses = loss_count(matches, &p.id);
            PlayerRecord {
                player_id: p.id.clone(),
                name: p.name.clone(),
                wins: win_count(matches, &p.id),
                losses,
                eliminated: is_eliminated(bracket_type, losses),
            }
        })
        .collect()
}

/// Players past the loss threshold, in roster order.
pub fn eliminated_players(
    bracket_type: BracketType,
    players: &[Player],
    matches: &[Match],
) -> Vec<Player> {
    players
        .iter()
        .zip(player_records(bracket_type, players, matches))
        .filter(|(_, r)| r.eliminated)
        .map(|(p, _)| p.clone())
        .collect()
}
