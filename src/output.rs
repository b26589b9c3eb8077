use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{MatchStatus, Pairing, ScheduledMatch, StandingsEntry};

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn standings_table(standings: &[StandingsEntry]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:>6}  {:<24} {:>4} {:>7}",
        "#", "id", "name", "wins", "played"
    )
    .bold()
    .to_string()];

    for (rank, entry) in standings.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>6}  {:<24} {:>4} {:>7}",
            rank + 1,
            entry.id,
            entry.name,
            entry.wins,
            entry.matches_played
        ));
    }

    lines.join("\n")
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    let mut lines = vec![format!("{:>5}  {:<30} {:<30}", "table", "player 1", "player 2")
        .bold()
        .to_string()];

    for (table, pairing) in pairings.iter().enumerate() {
        lines.push(format!(
            "{:>5}  {:<30} {:<30}",
            table + 1,
            format!("{} (#{})", pairing.player1_name, pairing.player1_id),
            format!("{} (#{})", pairing.player2_name, pairing.player2_id),
        ));
    }

    lines.join("\n")
}

pub fn matches_table(matches: &[ScheduledMatch]) -> String {
    let mut lines = vec![format!("{:>6}  {:>8}  {:>8}  {:<10}", "id", "player 1", "player 2", "status")
        .bold()
        .to_string()];

    for scheduled in matches {
        let status = scheduled.status.as_str();
        let status = match scheduled.status {
            MatchStatus::Pending => status.yellow(),
            MatchStatus::Completed => status.green(),
        };
        lines.push(format!(
            "{:>6}  {:>8}  {:>8}  {:<10}",
            scheduled.id, scheduled.player1, scheduled.player2, status
        ));
    }

    lines.join("\n")
}
