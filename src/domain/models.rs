use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type MatchId = i64;

/// Registered tournament participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win" => Some(Outcome::Win),
            "loss" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// One row per player per completed match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: i64,
    pub player: PlayerId,
    pub outcome: Outcome,
    pub recorded_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Pending,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(MatchStatus::Pending),
            "completed" => Some(MatchStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub status: MatchStatus,
    pub created_at: Option<NaiveDateTime>,
}

impl ScheduledMatch {
    /// Returns the id in the other slot when `player` took part in this match.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.player1 == player {
            Some(self.player2)
        } else if self.player2 == player {
            Some(self.player1)
        } else {
            None
        }
    }

    pub fn involves(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }
}

/// Derived row of the standings table, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    pub fn new(first: &StandingsEntry, second: &StandingsEntry) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.player1_id, self.player2_id)
    }
}

/// A reported outcome ready to be written: one Win row, one Loss row and,
/// when present, the scheduled match it completes.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub completes: Option<MatchId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(player1: PlayerId, player2: PlayerId) -> ScheduledMatch {
        ScheduledMatch {
            id: 1,
            player1,
            player2,
            status: MatchStatus::Pending,
            created_at: None,
        }
    }

    #[test]
    fn test_opponent_of_checks_both_slots() {
        let m = scheduled(3, 7);
        assert_eq!(m.opponent_of(3), Some(7));
        assert_eq!(m.opponent_of(7), Some(3));
        assert_eq!(m.opponent_of(5), None);
    }

    #[test]
    fn test_involves_ignores_slot_order() {
        let m = scheduled(3, 7);
        assert!(m.involves(7, 3));
        assert!(m.involves(3, 7));
        assert!(!m.involves(3, 3));
    }

    #[test]
    fn test_storage_names() {
        assert_eq!(Outcome::parse(Outcome::Loss.as_str()), Some(Outcome::Loss));
        assert_eq!(MatchStatus::parse("completed"), Some(MatchStatus::Completed));
        assert_eq!(MatchStatus::parse("cancelled"), None);
    }
}
