use thiserror::Error;

use crate::domain::PlayerId;

/// Failures of tournament operations that callers are expected to handle.
///
/// Infrastructure errors (SQLite, pool) are not listed here; they travel as
/// `anyhow::Error` with context attached. Use `downcast_ref::<TournamentError>()`
/// on an `anyhow::Error` to tell the two apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("no remaining opponent for player {player_id} ({player_name}): every unpaired player has already met them")]
    InfeasiblePairing {
        player_id: PlayerId,
        player_name: String,
    },

    #[error("player {0} is not registered")]
    InvalidReference(PlayerId),

    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("no pending match scheduled between {winner} and {loser}")]
    UnscheduledMatch { winner: PlayerId, loser: PlayerId },
}

/// Check whether an error chain carries the given domain error
#[cfg(test)]
pub(crate) fn is_tournament_error(err: &anyhow::Error, expected: &TournamentError) -> bool {
    err.downcast_ref::<TournamentError>() == Some(expected)
}
