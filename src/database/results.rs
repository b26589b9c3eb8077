use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::{matches, players};
use crate::domain::{MatchReport, MatchResult, Outcome, PlayerId};
use crate::errors::TournamentError;

pub fn insert_result(conn: &Connection, player: PlayerId, outcome: Outcome) -> Result<MatchResult> {
    if !players::exists(conn, player)? {
        return Err(TournamentError::InvalidReference(player).into());
    }

    let sql = "INSERT INTO results (player, outcome) VALUES (?1, ?2) RETURNING id, player, outcome, recorded_at";

    conn.query_row(sql, params![player, outcome], parse_result_row)
        .context("Failed to insert result")
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<MatchResult> {
    Ok(MatchResult {
        id: row.get(0)?,
        player: row.get(1)?,
        outcome: row.get(2)?,
        recorded_at: row.get(3)?,
    })
}

/// Writes the winner's and loser's rows, and completes the scheduled match
/// if the report names one. Either everything is written or nothing is.
pub fn record_match(conn: &mut Connection, report: &MatchReport) -> Result<()> {
    let tx = conn.transaction().context("Failed to start transaction")?;

    insert_result(&tx, report.winner, Outcome::Win)?;
    insert_result(&tx, report.loser, Outcome::Loss)?;

    if let Some(match_id) = report.completes {
        matches::mark_completed(&tx, match_id)?;
    }

    tx.commit().context("Failed to commit match result")
}

pub fn list_all(conn: &Connection) -> Result<Vec<MatchResult>> {
    let sql = "SELECT id, player, outcome, recorded_at FROM results ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM results", [])
        .context("Failed to delete results")
}
