use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard};

use crate::config::settings::{ReportPolicy, TournamentSettings};
use crate::domain::{MatchReport, Pairing, Player, PlayerId, ScheduledMatch, StandingsEntry};
use crate::errors::TournamentError;
use crate::pairing;
use crate::ranking;
use crate::store::TournamentStore;

/// Entry point for running a tournament over any store.
///
/// Operations that read and then write shared history (reporting results,
/// generating pairings, resets) are serialized through a single gate, so a
/// service instance never pairs against a half-written round.
pub struct TournamentService<S> {
    store: S,
    settings: TournamentSettings,
    gate: Mutex<()>,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S, settings: TournamentSettings) -> Self {
        Self {
            store,
            settings,
            gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let player = self.store.add_player(name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn delete_players(&self) -> Result<()> {
        let _guard = self.lock()?;
        self.store.remove_all_players()?;
        info!("Removed all players");
        Ok(())
    }

    /// Clears the schedule and every recorded result.
    pub fn delete_matches(&self) -> Result<()> {
        let _guard = self.lock()?;
        self.store.clear_round()?;
        info!("Removed all matches and results");
        Ok(())
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner).into());
        }

        let _guard = self.lock()?;
        let completes = match self.settings.report_policy {
            ReportPolicy::Unconditional => None,
            ReportPolicy::RequireScheduled => {
                let scheduled = self
                    .store
                    .find_pending_between(winner, loser)?
                    .ok_or(TournamentError::UnscheduledMatch { winner, loser })?;
                Some(scheduled.id)
            }
        };

        self.store
            .record_match(&MatchReport { winner, loser, completes })
            .with_context(|| format!("Failed to report {} beating {}", winner, loser))?;

        info!("Recorded {} beating {}", winner, loser);
        Ok(())
    }

    pub fn player_standings(&self) -> Result<Vec<StandingsEntry>> {
        let players = self.store.all_players()?;
        let results = self.store.all_results()?;
        Ok(ranking::rank(&players, &results))
    }

    pub fn scheduled_matches(&self) -> Result<Vec<ScheduledMatch>> {
        self.store.all_matches()
    }

    /// Pairs the next round and schedules it.
    ///
    /// Nothing is scheduled unless every player could be paired.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let _guard = self.lock()?;

        let standings = self.player_standings()?;
        let history = self.store.all_matches()?;

        let pairings = pairing::generate_pairings(&standings, &history)
            .inspect_err(|err| warn!("Pairing failed: {}", err))?;

        let pairs: Vec<(PlayerId, PlayerId)> = pairings.iter().map(Pairing::ids).collect();
        let scheduled = self.store.insert_pending_batch(&pairs)?;
        info!("Scheduled {} matches for the next round", scheduled.len());

        Ok(pairings)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.gate
            .lock()
            .map_err(|_| anyhow::anyhow!("Tournament gate poisoned by a panicked operation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchStatus;
    use crate::errors::is_tournament_error;
    use crate::store::SqliteStore;

    fn service(policy: ReportPolicy) -> TournamentService<SqliteStore> {
        let store = SqliteStore::in_memory().unwrap();
        TournamentService::new(store, TournamentSettings { report_policy: policy })
    }

    fn register_all(service: &TournamentService<SqliteStore>, names: &[&str]) -> Vec<PlayerId> {
        names
            .iter()
            .map(|name| service.register_player(name).unwrap().id)
            .collect()
    }

    #[test]
    fn test_self_match_is_rejected() {
        let service = service(ReportPolicy::Unconditional);
        let ids = register_all(&service, &["Ann"]);

        let err = service.report_match(ids[0], ids[0]).unwrap_err();
        assert!(is_tournament_error(&err, &TournamentError::SelfMatch(ids[0])));
    }

    #[test]
    fn test_scheduled_policy_rejects_unscheduled_report() {
        let service = service(ReportPolicy::RequireScheduled);
        let ids = register_all(&service, &["Ann", "Bob"]);

        let err = service.report_match(ids[0], ids[1]).unwrap_err();
        assert!(is_tournament_error(
            &err,
            &TournamentError::UnscheduledMatch { winner: ids[0], loser: ids[1] }
        ));
        assert!(service.player_standings().unwrap().iter().all(|e| e.matches_played == 0));
    }

    #[test]
    fn test_scheduled_policy_completes_the_match() {
        let service = service(ReportPolicy::RequireScheduled);
        let ids = register_all(&service, &["Ann", "Bob"]);

        service.swiss_pairings().unwrap();
        service.report_match(ids[1], ids[0]).unwrap();

        let matches = service.scheduled_matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].status, MatchStatus::Completed);

        let err = service.report_match(ids[1], ids[0]).unwrap_err();
        assert!(err.downcast_ref::<TournamentError>().is_some());
    }

    #[test]
    fn test_failed_pairing_schedules_nothing() {
        let service = service(ReportPolicy::Unconditional);
        register_all(&service, &["Ann", "Bob"]);

        service.swiss_pairings().unwrap();
        assert_eq!(service.scheduled_matches().unwrap().len(), 1);

        let err = service.swiss_pairings().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::InfeasiblePairing { .. })
        ));
        assert_eq!(service.scheduled_matches().unwrap().len(), 1);
    }

    #[test]
    fn test_odd_field_is_rejected() {
        let service = service(ReportPolicy::Unconditional);
        register_all(&service, &["Ann", "Bob", "Cid"]);

        let err = service.swiss_pairings().unwrap_err();
        assert!(is_tournament_error(&err, &TournamentError::OddPlayerCount(3)));
        assert!(service.scheduled_matches().unwrap().is_empty());
    }
}
