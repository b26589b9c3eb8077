pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod ranking;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;

use crate::cli::Cli;
use crate::config::settings::{AppConfig, ReportPolicy};
use crate::services::TournamentService;
use crate::store::SqliteStore;

pub type SqliteTournament = TournamentService<SqliteStore>;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment first, then command line flags on top.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = &cli.database {
        config.database.path = path.clone();
    }
    if cli.require_scheduled {
        config.tournament.report_policy = ReportPolicy::RequireScheduled;
    }
    Ok(config)
}

pub fn open_tournament(config: &AppConfig) -> Result<SqliteTournament> {
    let store = SqliteStore::open(&config.database)?;
    Ok(TournamentService::new(store, config.tournament.clone()))
}

pub fn handle_init(tournament: &SqliteTournament) -> Result<()> {
    tournament.store().reset()?;
    println!("Database initialised");
    Ok(())
}

pub fn handle_register(tournament: &SqliteTournament, name: &str) -> Result<()> {
    let player = tournament.register_player(name)?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_count(tournament: &SqliteTournament) -> Result<()> {
    println!("{}", tournament.count_players()?);
    Ok(())
}

pub fn handle_report(tournament: &SqliteTournament, winner: i64, loser: i64) -> Result<()> {
    tournament.report_match(winner, loser)?;
    println!("Recorded {} beating {}", winner, loser);
    Ok(())
}

pub fn handle_standings(tournament: &SqliteTournament, json: bool) -> Result<()> {
    let standings = tournament.player_standings()?;
    if json {
        return output::print_json(&standings);
    }
    println!("{}", output::standings_table(&standings));
    Ok(())
}

pub fn handle_pair(tournament: &SqliteTournament, json: bool) -> Result<()> {
    let pairings = tournament.swiss_pairings()?;
    info!("Generated {} pairings", pairings.len());
    if json {
        return output::print_json(&pairings);
    }
    println!("{}", output::pairings_table(&pairings));
    Ok(())
}

pub fn handle_matches(tournament: &SqliteTournament) -> Result<()> {
    let matches = tournament.scheduled_matches()?;
    println!("{}", output::matches_table(&matches));
    Ok(())
}

pub fn handle_delete_matches(tournament: &SqliteTournament) -> Result<()> {
    tournament.delete_matches()
}

pub fn handle_delete_players(tournament: &SqliteTournament) -> Result<()> {
    tournament.delete_players()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
