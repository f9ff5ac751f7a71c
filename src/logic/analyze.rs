//! Derived bracket state: one pure pass over a tournament snapshot.

use crate::logic::champions::{find_grand_final, losers_champion, winners_champion};
use crate::logic::elimination::player_records;
use crate::logic::frontier::{playable_matches, single_participant_matches};
use crate::logic::issues::{blocking_issues, BlockingIssue};
use crate::models::{
    BracketType, Match, Player, PlayerId, PlayerRecord, RoundKind, Snapshot, Tournament,
};
use serde::Serialize;

/// Coarse progress label, derived from the other fields (never stored).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketProgress {
    /// No match has a result yet.
    NotStarted,
    WinnersInProgress,
    /// Double elimination only: every winners match decided, losers bracket still running.
    LosersInProgress,
    GrandFinalReady,
    Completed,
}

/// Everything the debugger view shows about a bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DebugInfo {
    /// The round-1000 match, if one exists.
    pub grand_final: Option<Match>,
    pub grand_final_completed: bool,
    pub winners_champion: Option<PlayerId>,
    pub losers_champion: Option<PlayerId>,
    /// Both champions known. Only meaningful for double elimination.
    pub grand_final_ready: bool,
    /// Mirrors `grand_final_completed`, so a single-elimination bracket never reports completion.
    pub tournament_completed: bool,
    pub playable_matches: Vec<Match>,
    /// Auto-advance candidates.
    pub single_participant_matches: Vec<Match>,
    pub eliminated_players: Vec<Player>,
    pub active_players: usize,
    pub player_records: Vec<PlayerRecord>,
    pub total_matches: usize,
    pub completed_matches: usize,
    pub blocking_issues: Vec<BlockingIssue>,
    pub progress: BracketProgress,
}

impl DebugInfo {
    /// How many matches the external auto-advance step would touch.
    pub fn auto_advance_count(&self) -> usize {
        self.single_participant_matches.len()
    }
}

/// Derive bracket state from a snapshot. Never fails: missing data yields no champions,
/// zero counts and no issues.
pub fn analyze(tournament: &Tournament, players: &[Player], matches: &[Match]) -> DebugInfo {
    let bracket_type = tournament.bracket_type;

    let grand_final = find_grand_final(matches);
    let grand_final_completed = grand_final.map_or(false, Match::is_decided);

    let winners_champion = winners_champion(matches);
    let losers_champion = losers_champion(matches);
    let grand_final_ready = winners_champion.is_some() && losers_champion.is_some();
    let tournament_completed = grand_final_completed;

    let player_records = player_records(bracket_type, players, matches);
    let eliminated: Vec<Player> = players
        .iter()
        .zip(&player_records)
        .filter(|(_, r)| r.eliminated)
        .map(|(p, _)| p.clone())
        .collect();
    let active_players = players.len().saturating_sub(eliminated.len());
    let completed_matches = matches.iter().filter(|m| m.is_decided()).count();

    let blocking_issues = blocking_issues(
        bracket_type,
        matches,
        winners_champion.as_deref(),
        losers_champion.as_deref(),
        grand_final,
    );

    let progress = if tournament_completed {
        BracketProgress::Completed
    } else if grand_final_ready {
        BracketProgress::GrandFinalReady
    } else if bracket_type == BracketType::Double
        && winners_champion.is_some()
        && winners_bracket_finished(matches)
    {
        BracketProgress::LosersInProgress
    } else if completed_matches > 0 {
        BracketProgress::WinnersInProgress
    } else {
        BracketProgress::NotStarted
    };

    let info = DebugInfo {
        grand_final: grand_final.cloned(),
        grand_final_completed,
        winners_champion,
        losers_champion,
        grand_final_ready,
        tournament_completed,
        playable_matches: playable_matches(matches),
        single_participant_matches: single_participant_matches(matches),
        eliminated_players: eliminated,
        active_players,
        player_records,
        total_matches: matches.len(),
        completed_matches,
        blocking_issues,
        progress,
    };
    log::debug!(
        "Analyzed tournament {:?}: {} matches ({} decided), {} playable, {} single-participant, {} active players, {} blocking issue(s)",
        tournament.id,
        info.total_matches,
        info.completed_matches,
        info.playable_matches.len(),
        info.single_participant_matches.len(),
        info.active_players,
        info.blocking_issues.len()
    );
    info
}

/// The winners champion is provisional until no winners-round match is left undecided.
fn winners_bracket_finished(matches: &[Match]) -> bool {
    !matches
        .iter()
        .any(|m| matches!(m.kind(), RoundKind::Winners(_)) && !m.is_decided())
}

/// Convenience wrapper over [`analyze`] for a loaded snapshot.
pub fn analyze_snapshot(snapshot: &Snapshot) -> DebugInfo {
    analyze(&snapshot.tournament, &snapshot.players, &snapshot.matches)
}
