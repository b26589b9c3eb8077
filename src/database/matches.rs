use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::results;
use crate::domain::{MatchId, MatchStatus, PlayerId, ScheduledMatch};

pub fn insert_pending(conn: &Connection, player1: PlayerId, player2: PlayerId) -> Result<ScheduledMatch> {
    let sql = "INSERT INTO matches (player1, player2, status) VALUES (?1, ?2, ?3) RETURNING id, player1, player2, status, created_at";

    conn.query_row(
        sql,
        params![player1, player2, MatchStatus::Pending],
        parse_match_row,
    )
    .with_context(|| format!("Failed to schedule match {} vs {}", player1, player2))
}

/// Schedules every pair in one transaction.
pub fn insert_pending_batch(
    conn: &mut Connection,
    pairs: &[(PlayerId, PlayerId)],
) -> Result<Vec<ScheduledMatch>> {
    let tx = conn.transaction().context("Failed to start transaction")?;

    let mut scheduled = Vec::with_capacity(pairs.len());
    for &(player1, player2) in pairs {
        scheduled.push(insert_pending(&tx, player1, player2)?);
    }

    tx.commit().context("Failed to commit scheduled matches")?;
    Ok(scheduled)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<ScheduledMatch> {
    Ok(ScheduledMatch {
        id: row.get(0)?,
        player1: row.get(1)?,
        player2: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<ScheduledMatch>> {
    let sql = "SELECT id, player1, player2, status, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Oldest pending match between the two players, in either slot order.
pub fn find_pending_between(
    conn: &Connection,
    a: PlayerId,
    b: PlayerId,
) -> Result<Option<ScheduledMatch>> {
    let sql = "
        SELECT id, player1, player2, status, created_at
        FROM matches
        WHERE status = ?3
          AND ((player1 = ?1 AND player2 = ?2) OR (player1 = ?2 AND player2 = ?1))
        ORDER BY id
        LIMIT 1
    ";

    conn.query_row(sql, params![a, b, MatchStatus::Pending], parse_match_row)
        .optional()
        .context("Failed to query pending match")
}

pub fn mark_completed(conn: &Connection, id: MatchId) -> Result<()> {
    let sql = "UPDATE matches SET status = ?1 WHERE id = ?2 AND status = ?3";

    let updated = conn
        .execute(sql, params![MatchStatus::Completed, id, MatchStatus::Pending])
        .context("Failed to complete match")?;

    if updated != 1 {
        anyhow::bail!("Match {} is not pending", id);
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}

/// Clears the schedule and every recorded result in one transaction.
pub fn clear_round(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().context("Failed to start transaction")?;

    delete_all(&tx)?;
    results::delete_all(&tx)?;

    tx.commit().context("Failed to commit match reset")
}
