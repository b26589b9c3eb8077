use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::{
    build_config, handle_completions, handle_count, handle_delete_matches, handle_delete_players,
    handle_init, handle_matches, handle_pair, handle_register, handle_report, handle_standings,
    interpret, open_tournament,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        return handle_completions(*shell);
    }

    let config = build_config(cli)?;
    let tournament = open_tournament(&config)?;

    match &cli.command {
        Command::Init => handle_init(&tournament),
        Command::Register { name } => handle_register(&tournament, name),
        Command::Count => handle_count(&tournament),
        Command::Report { winner, loser } => handle_report(&tournament, *winner, *loser),
        Command::Standings { json } => handle_standings(&tournament, *json),
        Command::Pair { json } => handle_pair(&tournament, *json),
        Command::Matches => handle_matches(&tournament),
        Command::DeleteMatches => handle_delete_matches(&tournament),
        Command::DeletePlayers => handle_delete_players(&tournament),
        Command::Completions { .. } => Ok(()),
    }
}
