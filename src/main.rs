use anyhow::Result;

use tt_league::cli::Command;
use tt_league::{
    handle_completions, handle_prizes, handle_record, handle_redeem, handle_roster,
    handle_schedule, handle_seed, interpret,
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
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Record {
            session,
            output,
            apply,
        } => handle_record(session, output.as_deref(), *apply),
        Command::Schedule { size } => handle_schedule(*size),
        Command::Roster => handle_roster(),
        Command::Seed { name, rating } => handle_seed(name, *rating),
        Command::Prizes => handle_prizes(),
        Command::Redeem { name, points } => handle_redeem(name, *points),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
