use std::collections::VecDeque;
use log::{debug, info, warn};

use super::history::HistoryLedger;
use crate::domain::{Pairing, ScheduledMatch, StandingsEntry};
use crate::errors::TournamentError;

/// Builds next-round pairings from ranked standings.
///
/// The best unpaired player is matched with the next player down the
/// standings they have not met yet. The search is greedy and never
/// backtracks, so an early choice can leave a later player without any
/// eligible opponent even when a complete pairing exists; that case is
/// reported as [`TournamentError::InfeasiblePairing`].
pub fn generate_pairings(
    standings: &[StandingsEntry],
    history: &[ScheduledMatch],
) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        warn!("Refusing to pair {} players", standings.len());
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    info!(
        "Pairing {} players against {} historical matches",
        standings.len(),
        history.len()
    );

    let mut worklist: VecDeque<&StandingsEntry> = standings.iter().collect();
    let mut ledger = HistoryLedger::new(history);
    let mut pairings = Vec::with_capacity(standings.len() / 2);

    while let Some(player) = worklist.pop_front() {
        let previous_opponents = ledger.claim_opponents(player.id);

        let opponent = worklist
            .iter()
            .position(|candidate| !previous_opponents.contains(&candidate.id))
            .and_then(|position| worklist.remove(position))
            .ok_or_else(|| TournamentError::InfeasiblePairing {
                player_id: player.id,
                player_name: player.name.clone(),
            })?;

        debug!("Paired {} with {}", player.id, opponent.id);
        pairings.push(Pairing::new(player, opponent));
    }

    debug!("{} historical matches left unclaimed", ledger.unclaimed());
    Ok(pairings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchStatus, PlayerId};
    use std::collections::HashSet;

    fn entry(id: PlayerId, name: &str, wins: u32) -> StandingsEntry {
        StandingsEntry {
            id,
            name: name.to_string(),
            wins,
            matches_played: wins,
        }
    }

    fn played(id: i64, player1: PlayerId, player2: PlayerId) -> ScheduledMatch {
        ScheduledMatch {
            id,
            player1,
            player2,
            status: MatchStatus::Completed,
            created_at: None,
        }
    }

    fn ids(pairings: &[Pairing]) -> Vec<(PlayerId, PlayerId)> {
        pairings.iter().map(Pairing::ids).collect()
    }

    #[test]
    fn test_adjacent_players_are_paired() {
        let standings = vec![
            entry(1, "A", 2),
            entry(2, "B", 2),
            entry(3, "C", 1),
            entry(4, "D", 0),
        ];

        let pairings = generate_pairings(&standings, &[]).unwrap();
        assert_eq!(ids(&pairings), vec![(1, 2), (3, 4)]);
        assert_eq!(pairings[0].player1_name, "A");
        assert_eq!(pairings[1].player2_name, "D");
    }

    #[test]
    fn test_previous_opponent_is_skipped() {
        let standings = vec![
            entry(1, "A", 2),
            entry(2, "B", 2),
            entry(3, "C", 1),
            entry(4, "D", 0),
        ];
        let history = vec![played(1, 2, 1)];

        let pairings = generate_pairings(&standings, &history).unwrap();
        assert_eq!(ids(&pairings), vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn test_rematch_is_infeasible() {
        let standings = vec![entry(1, "A", 1), entry(2, "B", 0)];
        let history = vec![played(1, 1, 2)];

        let err = generate_pairings(&standings, &history).unwrap_err();
        assert_eq!(
            err,
            TournamentError::InfeasiblePairing {
                player_id: 1,
                player_name: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_greedy_choice_can_starve_later_player() {
        // A-C / B-D would work, but A takes B first and leaves C with D.
        let standings = vec![
            entry(1, "A", 2),
            entry(2, "B", 1),
            entry(3, "C", 1),
            entry(4, "D", 0),
        ];
        let history = vec![played(1, 3, 4)];

        let err = generate_pairings(&standings, &history).unwrap_err();
        assert!(matches!(err, TournamentError::InfeasiblePairing { player_id: 3, .. }));
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let standings = vec![entry(1, "A", 0), entry(2, "B", 0), entry(3, "C", 0)];

        assert_eq!(
            generate_pairings(&standings, &[]).unwrap_err(),
            TournamentError::OddPlayerCount(3)
        );
    }

    #[test]
    fn test_empty_field_produces_no_pairings() {
        assert!(generate_pairings(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_every_player_paired_once_without_repeats() {
        let standings: Vec<StandingsEntry> = (1..=8)
            .map(|id| entry(id, &format!("P{id}"), (8 - id) as u32 / 2))
            .collect();
        let history = vec![
            played(1, 1, 2),
            played(2, 3, 4),
            played(3, 5, 6),
            played(4, 7, 8),
            played(5, 1, 3),
            played(6, 2, 4),
        ];

        let pairings = generate_pairings(&standings, &history).unwrap();
        assert_eq!(pairings.len(), 4);

        let mut seen = HashSet::new();
        for (a, b) in ids(&pairings) {
            assert!(seen.insert(a));
            assert!(seen.insert(b));
            assert!(!history.iter().any(|m| m.involves(a, b)));
        }
        assert_eq!(seen.len(), 8);
    }
}
