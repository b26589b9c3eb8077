use anyhow::Result;
use log::info;

use super::{MatchStore, PlayerRegistry, ResultStore};
use crate::config::settings::DatabaseSettings;
use crate::database::{self, matches, players, results, DbConn, DbPool};
use crate::domain::{MatchReport, MatchResult, Outcome, Player, PlayerId, ScheduledMatch};

/// Store backed by an SQLite connection pool.
///
/// A connection is checked out for each call and returned to the pool when
/// the call ends, whether it succeeded or not.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the configured database file and creates missing tables.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        info!("Opening tournament database at {}", settings.path);
        let pool = database::create_pool(&settings.path, settings.pool_size)?;
        let store = Self::new(pool);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let store = Self::new(database::create_memory_pool()?);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connection()?;
        database::setup::ensure_schema(&conn)
    }

    pub fn reset(&self) -> Result<()> {
        let conn = self.connection()?;
        database::setup::reset_database(&conn)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}

impl PlayerRegistry for SqliteStore {
    fn add_player(&self, name: &str) -> Result<Player> {
        let conn = self.connection()?;
        players::insert_player(&conn, name)
    }

    fn count_players(&self) -> Result<usize> {
        let conn = self.connection()?;
        players::count(&conn)
    }

    fn all_players(&self) -> Result<Vec<Player>> {
        let conn = self.connection()?;
        players::list_all(&conn)
    }

    fn remove_all_players(&self) -> Result<()> {
        let conn = self.connection()?;
        players::delete_all(&conn).map(|_| ())
    }
}

impl ResultStore for SqliteStore {
    fn record_result(&self, player: PlayerId, outcome: Outcome) -> Result<MatchResult> {
        let conn = self.connection()?;
        results::insert_result(&conn, player, outcome)
    }

    fn record_match(&self, report: &MatchReport) -> Result<()> {
        let mut conn = self.connection()?;
        results::record_match(&mut conn, report)
    }

    fn all_results(&self) -> Result<Vec<MatchResult>> {
        let conn = self.connection()?;
        results::list_all(&conn)
    }

    fn remove_all_results(&self) -> Result<()> {
        let conn = self.connection()?;
        results::delete_all(&conn).map(|_| ())
    }
}

impl MatchStore for SqliteStore {
    fn all_matches(&self) -> Result<Vec<ScheduledMatch>> {
        let conn = self.connection()?;
        matches::list_all(&conn)
    }

    fn insert_pending(&self, player1: PlayerId, player2: PlayerId) -> Result<ScheduledMatch> {
        let conn = self.connection()?;
        matches::insert_pending(&conn, player1, player2)
    }

    fn insert_pending_batch(&self, pairs: &[(PlayerId, PlayerId)]) -> Result<Vec<ScheduledMatch>> {
        let mut conn = self.connection()?;
        matches::insert_pending_batch(&mut conn, pairs)
    }

    fn find_pending_between(&self, a: PlayerId, b: PlayerId) -> Result<Option<ScheduledMatch>> {
        let conn = self.connection()?;
        matches::find_pending_between(&conn, a, b)
    }

    fn remove_all_matches(&self) -> Result<()> {
        let conn = self.connection()?;
        matches::delete_all(&conn).map(|_| ())
    }

    fn clear_round(&self) -> Result<()> {
        let mut conn = self.connection()?;
        matches::clear_round(&mut conn)
    }
}
