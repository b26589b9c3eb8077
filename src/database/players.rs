use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Player, PlayerId};

pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, registered_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        registered_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, name, registered_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn exists(conn: &Connection, id: PlayerId) -> Result<bool> {
    Ok(find_by_id(conn, id)?.is_some())
}

/// All players in registration order.
pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, registered_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let total: i64 = conn
        .query_row("SELECT count(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")?;
    Ok(total as usize)
}

/// Removes every player. Results and matches go with them (ON DELETE CASCADE).
pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}
