//! Persistence seams consumed by the tournament service.
//!
//! The ranking and pairing logic never touch these traits directly; the
//! service reads through them, hands plain records to the pure functions and
//! writes the outcome back.

pub mod sqlite;

use anyhow::Result;

use crate::domain::{MatchReport, MatchResult, Outcome, Player, PlayerId, ScheduledMatch};

pub use sqlite::SqliteStore;

pub trait PlayerRegistry {
    fn add_player(&self, name: &str) -> Result<Player>;
    fn count_players(&self) -> Result<usize>;
    /// Players in a stable order; standings ties follow it.
    fn all_players(&self) -> Result<Vec<Player>>;
    fn remove_all_players(&self) -> Result<()>;
}

pub trait ResultStore {
    fn record_result(&self, player: PlayerId, outcome: Outcome) -> Result<MatchResult>;
    /// Records both rows of a match atomically.
    fn record_match(&self, report: &MatchReport) -> Result<()>;
    fn all_results(&self) -> Result<Vec<MatchResult>>;
    fn remove_all_results(&self) -> Result<()>;
}

pub trait MatchStore {
    fn all_matches(&self) -> Result<Vec<ScheduledMatch>>;
    fn insert_pending(&self, player1: PlayerId, player2: PlayerId) -> Result<ScheduledMatch>;
    /// All pairs are stored, or none.
    fn insert_pending_batch(&self, pairs: &[(PlayerId, PlayerId)]) -> Result<Vec<ScheduledMatch>>;
    fn find_pending_between(&self, a: PlayerId, b: PlayerId) -> Result<Option<ScheduledMatch>>;
    fn remove_all_matches(&self) -> Result<()>;
    /// Removes every scheduled match and every result together, or neither.
    fn clear_round(&self) -> Result<()>;
}

pub trait TournamentStore: PlayerRegistry + ResultStore + MatchStore {}

impl<T: PlayerRegistry + ResultStore + MatchStore> TournamentStore for T {}
