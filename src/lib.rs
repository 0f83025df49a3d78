pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod prize_points;
pub mod rating;
pub mod schedule;
pub mod services;
pub mod standings;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use std::path::Path;

use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::{prize_points as prize_store, roster};
use crate::services::SessionService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_record(session: &Path, output: Option<&Path>, apply: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = SessionService::new(config)?;
    service.run(session, output, apply).map(|_| ())
}

pub fn handle_schedule(size: usize) -> Result<()> {
    let rows = schedule::row_layout(size)?;
    println!("{}", format!("{} players, {} matches", size, rows.len()).bold());
    for row in rows {
        println!(
            "{:>2}. {:<5} rows {}-{}",
            row.index + 1,
            row.pairing,
            row.first_row,
            row.second_row
        );
    }
    Ok(())
}

pub fn handle_roster() -> Result<()> {
    let mut conn = open_store()?;
    let entries = roster::list_ranked(&mut conn)?;
    if entries.is_empty() {
        println!("Roster is empty");
    }
    for entry in entries {
        println!("{:>4}. {:<24} {:>5}", entry.rank, entry.name, entry.rating);
    }
    Ok(())
}

pub fn handle_seed(name: &str, rating: i32) -> Result<()> {
    let config = AppConfig::new();
    config.league.check_rating(name, rating)?;

    let mut conn = open_store()?;
    let entry = roster::upsert_rating(&mut conn, name, rating)?;
    println!("{} is now rated {}", entry.name, entry.rating);
    Ok(())
}

pub fn handle_prizes() -> Result<()> {
    let mut conn = open_store()?;
    println!(
        "{}",
        format!("{:<24} {:>6} {:>6} {:>9}", "Player", "Earned", "Used", "Remaining").bold()
    );
    for totals in prize_store::totals(&mut conn)? {
        println!(
            "{:<24} {:>6} {:>6} {:>9}",
            totals.name, totals.earned, totals.used, totals.remaining
        );
    }
    Ok(())
}

pub fn handle_redeem(name: &str, points: u32) -> Result<()> {
    let mut conn = open_store()?;
    prize_store::record_used(&mut conn, name, points)?;
    log::info!("Recorded {} used prize points for {}", points, name);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_store() -> Result<database::DbConn> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.store.database_path)
        .context("League store unavailable")?;
    database::get_connection(&pool)
}
