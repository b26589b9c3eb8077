use std::collections::HashMap;
use log::debug;

use crate::domain::{MatchResult, Outcome, Player, PlayerId, StandingsEntry};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u32,
    losses: u32,
}

/// Orders players by win count, best first.
///
/// Every registered player appears, including those without results.
/// Players with equal wins keep the order in which `players` lists them.
pub fn rank(players: &[Player], results: &[MatchResult]) -> Vec<StandingsEntry> {
    let tallies = tally_results(results);
    debug!("Ranking {} players from {} result rows", players.len(), results.len());

    let mut standings: Vec<StandingsEntry> = players
        .iter()
        .map(|player| build_entry(player, tallies.get(&player.id).copied().unwrap_or_default()))
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}

fn tally_results(results: &[MatchResult]) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();
    for result in results {
        let tally = tallies.entry(result.player).or_default();
        match result.outcome {
            Outcome::Win => tally.wins += 1,
            Outcome::Loss => tally.losses += 1,
        }
    }
    tallies
}

fn build_entry(player: &Player, tally: Tally) -> StandingsEntry {
    StandingsEntry {
        id: player.id,
        name: player.name.clone(),
        wins: tally.wins,
        matches_played: tally.wins + tally.losses,
    }
}
