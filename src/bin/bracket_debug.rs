//! Command-line bracket debugger: reads a tournament snapshot (JSON) and prints the derived state.
//! Run with: cargo run --bin bracket_debug -- snapshot.json
//! Reads stdin when the path is `-` or missing (env fallback: BRACKET_SNAPSHOT).
//! Output format via env BRACKET_OUTPUT: `text` (default) or `json`.

use bracket_debugger::{
    analyze_snapshot, auto_advance_needed, DebugInfo, Player, Snapshot, SnapshotError,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn output_format() -> OutputFormat {
    match std::env::var("BRACKET_OUTPUT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
        Ok(v) if !v.eq_ignore_ascii_case("text") => {
            log::warn!("Unknown BRACKET_OUTPUT {:?}, using text", v);
            OutputFormat::Text
        }
        _ => OutputFormat::Text,
    }
}

fn snapshot_source() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BRACKET_SNAPSHOT").ok())
        .filter(|p| p != "-")
}

fn load_snapshot(source: Option<&str>) -> Result<Snapshot, SnapshotError> {
    match source {
        Some(path) => Snapshot::from_reader(BufReader::new(File::open(path)?)),
        None => Snapshot::from_reader(io::stdin().lock()),
    }
}

fn player_name<'a>(players: &'a [Player], id: &'a str) -> &'a str {
    players
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or(id)
}

fn print_text(snapshot: &Snapshot, info: &DebugInfo) {
    let players = &snapshot.players;
    let name_or_none = |id: &Option<String>| match id {
        Some(id) => player_name(players, id).to_string(),
        None => "-".to_string(),
    };

    println!(
        "Tournament: {} ({:?})",
        snapshot.tournament.name.as_deref().unwrap_or(&snapshot.tournament.id),
        snapshot.tournament.bracket_type
    );
    println!("Progress: {:?}", info.progress);
    println!(
        "Matches: {} total, {} completed",
        info.total_matches, info.completed_matches
    );
    println!("Winners champion: {}", name_or_none(&info.winners_champion));
    println!("Losers champion: {}", name_or_none(&info.losers_champion));
    println!(
        "Grand final: ready={} completed={}",
        info.grand_final_ready, info.grand_final_completed
    );
    println!("Tournament completed: {}", info.tournament_completed);
    println!(
        "Players: {} active, {} eliminated",
        info.active_players,
        info.eliminated_players.len()
    );
    for p in &info.eliminated_players {
        println!("  eliminated: {}", p.name);
    }

    println!("Playable matches: {}", info.playable_matches.len());
    for m in &info.playable_matches {
        println!(
            "  {} #{}: {} vs {}",
            m.kind(),
            m.position,
            name_or_none(&m.participant1_id),
            name_or_none(&m.participant2_id)
        );
    }
    if auto_advance_needed(info) {
        println!(
            "Auto-advance needed: {} single-participant match(es)",
            info.auto_advance_count()
        );
    }
    if !info.blocking_issues.is_empty() {
        println!("Blocking issues:");
        for issue in &info.blocking_issues {
            println!("  - {}", issue);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let source = snapshot_source();
    let format = output_format();
    log::info!(
        "Reading snapshot from {}",
        source.as_deref().unwrap_or("stdin")
    );

    let snapshot = match load_snapshot(source.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let info = analyze_snapshot(&snapshot);

    match format {
        OutputFormat::Text => print_text(&snapshot, &info),
        OutputFormat::Json => match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Could not serialize analysis: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
