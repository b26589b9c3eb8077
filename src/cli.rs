use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or swiss_tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Only accept results for matches that were scheduled by `pair`
    #[arg(long, global = true)]
    pub require_scheduled: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop all data and recreate the schema
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Print the number of registered players
    Count,
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Print players ordered by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Pair the next round and schedule its matches
    Pair {
        #[arg(long)]
        json: bool,
    },
    /// List every scheduled match
    Matches,
    /// Remove all matches and results
    DeleteMatches,
    /// Remove all players, with their matches and results
    DeletePlayers,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}
