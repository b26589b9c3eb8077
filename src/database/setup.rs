use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_PREFIX: &str = "DROP";

/// Drops every table and recreates the schema.
pub fn reset_database(conn: &Connection) -> Result<()> {
    run_statements(conn, true)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

/// Creates missing tables, keeping existing data.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    run_statements(conn, false)?;
    log::debug!("Database schema verified");
    Ok(())
}

fn run_statements(conn: &Connection, include_drops: bool) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        if !include_drops && statement.starts_with(DROP_PREFIX) {
            continue;
        }
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_players(conn: &Connection) -> i64 {
        conn.query_row("SELECT count(*) FROM players", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_ensure_schema_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        conn.execute("INSERT INTO players (name) VALUES ('Ann')", []).unwrap();

        ensure_schema(&conn).unwrap();
        assert_eq!(count_players(&conn), 1);

        reset_database(&conn).unwrap();
        assert_eq!(count_players(&conn), 0);
    }

    #[test]
    fn test_split_skips_blank_statements() {
        let statements = split_sql_statements("SELECT 1;\n\n;SELECT 2;");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }
}
