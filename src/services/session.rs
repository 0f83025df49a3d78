use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::report::{GroupReport, SessionReport};
use crate::config::settings::AppConfig;
use crate::database::{self, prize_points, roster, DbConn, DbPool};
use crate::domain::{self, GroupEntry, MatchLedger, SessionInput, SessionName};
use crate::errors::{session_context, LeagueError};
use crate::prize_points::{self as prizes, PrizeMap};
use crate::rating::RatingValue;
use crate::standings;

pub struct SessionService {
    config: AppConfig,
    pool: DbPool,
}

impl SessionService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.store.database_path)?;
        Ok(Self { config, pool })
    }

    pub fn with_pool(config: AppConfig, pool: DbPool) -> Self {
        Self { config, pool }
    }

    /// Record one session file: rate every group, report, and optionally
    /// write the outcome to the league store
    pub fn run(
        &self,
        session_path: &Path,
        output: Option<&Path>,
        apply: bool,
    ) -> Result<SessionReport> {
        info!("=== Recording session {} ===", session_path.display());

        let input = load_session(session_path)?;
        let report = self.process(&input)?;
        self.log_summary(&report);

        if let Some(path) = output {
            write_report(&report, path)?;
        }

        if apply {
            self.apply(&report)?;
        } else {
            info!("Dry run: league store left untouched (pass --apply to write)");
        }

        info!("=== Session {} complete ===", report.label);
        Ok(report)
    }

    pub fn process(&self, input: &SessionInput) -> Result<SessionReport> {
        let name = SessionName::parse(&input.name, self.config.league.tryout_marker)?;
        self.check_group_count(input.groups.len())?;
        if name.is_tryouts {
            info!("  → Tryout session: no prize points will be awarded");
        }

        let mut conn = database::get_connection(&self.pool)?;
        let mut seen = HashSet::new();
        let mut groups = Vec::with_capacity(input.groups.len());

        for (idx, entry) in input.groups.iter().enumerate() {
            let group_number = idx as u32 + 1;
            for player in &entry.players {
                if !seen.insert(player.name.as_str()) {
                    warn!(
                        "{} appears in more than one group; the later group's rating wins",
                        player.name
                    );
                }
            }

            let report = self
                .process_group(&mut conn, group_number, entry, name.is_tryouts)
                .with_context(|| format!("Failed to process Group {}", group_number))?;
            info!(
                "  → Group {}: {} players, {} matches",
                group_number,
                report.players.len(),
                report.matches.len()
            );
            groups.push(report);
        }

        Ok(SessionReport::new(&input.name, &name, groups))
    }

    fn check_group_count(&self, count: usize) -> Result<()> {
        if count == 0 {
            bail!("Session has no groups");
        }
        if let Some(max) = self.config.league.max_groups {
            if count > max {
                bail!("Session has {} groups; at most {} are allowed", count, max);
            }
        }
        Ok(())
    }

    fn process_group(
        &self,
        conn: &mut DbConn,
        group_number: u32,
        entry: &GroupEntry,
        is_tryouts: bool,
    ) -> Result<GroupReport> {
        let entries = resolve_ratings(conn, entry)?;
        let group = domain::Group::new(group_number, entries, &self.config.league)?;
        let results = domain::parse_results(&entry.results)?;
        let ledger = MatchLedger::record(group, results)?;
        let standings = standings::resolve(ledger.group(), ledger.results())?;

        let awards = if is_tryouts {
            PrizeMap::new()
        } else {
            prizes::allocate(&standings, group_number, &self.config.prize_points)?
        };

        Ok(GroupReport::new(&ledger, standings, awards))
    }

    fn log_summary(&self, report: &SessionReport) {
        let mark = self.config.league.winner_mark;
        info!("{}", report.title().bold());
        info!("{}", SessionReport::description(mark));

        for group in &report.groups {
            info!("");
            info!("{}", group.name.bold());
            info!("{}", GroupReport::header());
            for (winner, line) in group.rows(mark) {
                if winner {
                    info!("{}", line.green().bold());
                } else {
                    info!("{}", line);
                }
            }
        }
    }

    fn apply(&self, report: &SessionReport) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        roster::apply_updates(&mut conn, &report.rating_updates)?;

        if !report.is_tryouts {
            prize_points::record_awards(&mut conn, &report.league_date, &report.prize_points())?;
        }
        Ok(())
    }
}

/// A player without a rating is a returning player; look them up
fn resolve_ratings(conn: &mut DbConn, entry: &GroupEntry) -> Result<Vec<(String, RatingValue)>> {
    entry
        .players
        .iter()
        .map(|player| -> Result<(String, RatingValue)> {
            let rating = match player.rating {
                Some(rating) => rating,
                None => roster::find_by_name(conn, &player.name)?
                    .map(|found| found.rating)
                    .ok_or_else(|| LeagueError::UnknownPlayer(player.name.clone()))?,
            };
            Ok((player.name.clone(), rating))
        })
        .collect()
}

fn load_session(path: &Path) -> Result<SessionInput> {
    let json = fs::read_to_string(path).with_context(|| session_context("read", path))?;
    serde_json::from_str(&json).with_context(|| session_context("parse", path))
}

fn write_report(report: &SessionReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize session report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))?;

    info!("Saved session report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerEntry;

    fn service() -> SessionService {
        let pool = database::create_memory_pool().unwrap();
        SessionService::with_pool(AppConfig::new(), pool)
    }

    fn player(name: &str, rating: Option<RatingValue>) -> PlayerEntry {
        PlayerEntry {
            name: name.to_string(),
            rating,
        }
    }

    fn four_player_session(name: &str) -> SessionInput {
        SessionInput {
            name: name.to_string(),
            groups: vec![GroupEntry {
                players: vec![
                    player("Dee", Some(1300)),
                    player("Bo", Some(1500)),
                    player("Ann", Some(1600)),
                    player("Cho", Some(1400)),
                ],
                results: ["3:2", "3:1", "3:0", "3:2", "3:1", "3:2"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }],
        }
    }

    #[test]
    fn processes_a_league_night() {
        let report = service().process(&four_player_session("09-10-23")).unwrap();
        let group = &report.groups[0];

        let names: Vec<&str> = group.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bo", "Cho", "Dee"]);
        assert!(group.players[0].winner);
        assert_eq!(group.prize_points["Ann"], 10);
        assert_eq!(group.prize_points["Dee"], 4);
        assert_eq!(report.league_date, "09-10-23");
    }

    #[test]
    fn tryouts_award_no_points() {
        let report = service().process(&four_player_session("09-10-23 Tryouts")).unwrap();
        assert!(report.is_tryouts);
        assert!(report.prize_points().is_empty());
        assert_eq!(report.rating_updates.len(), 4);
    }

    #[test]
    fn returning_players_are_seeded_from_roster() {
        let service = service();
        {
            let mut conn = database::get_connection(&service.pool).unwrap();
            roster::upsert_rating(&mut conn, "Ann", 1600).unwrap();
        }
        let mut input = four_player_session("09-10-23");
        input.groups[0].players[2].rating = None;

        let report = service.process(&input).unwrap();
        assert_eq!(report.groups[0].players[0].base_rating, 1600);
    }

    #[test]
    fn unknown_returning_player_fails() {
        let mut input = four_player_session("09-10-23");
        input.groups[0].players[0].rating = None;

        let err = service().process(&input).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<LeagueError>(),
            Some(&LeagueError::UnknownPlayer("Dee".to_string()))
        );
    }

    #[test]
    fn group_limit_is_enforced_when_configured() {
        let pool = database::create_memory_pool().unwrap();
        let mut config = AppConfig::new();
        config.league.max_groups = Some(1);
        let service = SessionService::with_pool(config, pool);

        let mut input = four_player_session("09-10-23");
        input.groups.push(input.groups[0].clone());
        assert!(service.process(&input).is_err());
    }

    #[test]
    fn apply_writes_roster_and_prizes() {
        let service = service();
        let report = service.process(&four_player_session("09-10-23")).unwrap();
        service.apply(&report).unwrap();

        let mut conn = database::get_connection(&service.pool).unwrap();
        let ann = roster::find_by_name(&mut conn, "Ann").unwrap().unwrap();
        assert_eq!(ann.rating, 1605);
        let totals = prize_points::totals(&mut conn).unwrap();
        assert_eq!(totals.len(), 4);
    }
}
