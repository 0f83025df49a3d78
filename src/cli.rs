use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Table-tennis league records: ratings, standings and prize points"
)]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate a session file and print its summary
    Record {
        /// Session file (JSON)
        session: PathBuf,
        /// Write the full session report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write rating updates and prize points to the league store
        #[arg(short, long)]
        apply: bool,
    },
    /// Print the match order and record-sheet rows for a group size
    Schedule {
        /// Players in the group (3-7)
        size: usize,
    },
    /// Print the roster, highest rating first
    Roster,
    /// Add a player to the roster or overwrite their rating
    Seed { name: String, rating: i32 },
    /// Print earned, used and remaining prize points
    Prizes,
    /// Record prize points a player has spent
    Redeem { name: String, points: u32 },
    /// Generate shell completions
    Completions { shell: Shell },
}
