use std::collections::HashSet;

use crate::domain::{PlayerId, ScheduledMatch};

/// Working copy of the match history for a single pairing run.
///
/// Each row can be claimed once. After a player has claimed a row it no longer
/// contributes to anybody else's opponent list during the same run.
pub struct HistoryLedger<'a> {
    rows: &'a [ScheduledMatch],
    claimed: Vec<bool>,
}

impl<'a> HistoryLedger<'a> {
    pub fn new(rows: &'a [ScheduledMatch]) -> Self {
        Self {
            rows,
            claimed: vec![false; rows.len()],
        }
    }

    /// Claims every unclaimed row in which `player` took part and returns the
    /// ids found in the other slot.
    pub fn claim_opponents(&mut self, player: PlayerId) -> HashSet<PlayerId> {
        let mut opponents = HashSet::new();

        for (idx, row) in self.rows.iter().enumerate() {
            if self.claimed[idx] {
                continue;
            }
            if let Some(opponent) = row.opponent_of(player) {
                self.claimed[idx] = true;
                opponents.insert(opponent);
            }
        }

        opponents
    }

    pub fn unclaimed(&self) -> usize {
        self.claimed.iter().filter(|claimed| !**claimed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchStatus;

    fn row(id: i64, player1: PlayerId, player2: PlayerId) -> ScheduledMatch {
        ScheduledMatch {
            id,
            player1,
            player2,
            status: MatchStatus::Completed,
            created_at: None,
        }
    }

    #[test]
    fn test_collects_opponents_from_either_slot() {
        let rows = vec![row(1, 1, 2), row(2, 3, 1), row(3, 2, 3)];
        let mut ledger = HistoryLedger::new(&rows);

        let opponents = ledger.claim_opponents(1);
        assert_eq!(opponents, HashSet::from([2, 3]));
        assert_eq!(ledger.unclaimed(), 1);
    }

    #[test]
    fn test_row_is_claimed_only_once() {
        let rows = vec![row(1, 1, 2)];
        let mut ledger = HistoryLedger::new(&rows);

        assert_eq!(ledger.claim_opponents(1), HashSet::from([2]));
        assert!(ledger.claim_opponents(2).is_empty());
        assert_eq!(ledger.unclaimed(), 0);
    }

    #[test]
    fn test_repeated_meetings_collapse() {
        let rows = vec![row(1, 4, 5), row(2, 5, 4)];
        let mut ledger = HistoryLedger::new(&rows);

        assert_eq!(ledger.claim_opponents(4), HashSet::from([5]));
        assert_eq!(ledger.unclaimed(), 0);
    }
}
