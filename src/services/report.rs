use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{MatchLedger, MatchRecord, SessionName};
use crate::prize_points::PrizeMap;
use crate::rating::{RatingUpdate, RatingValue};
use crate::schedule;
use crate::standings::{self, StandingsGroup};

/// Everything one processed session produced, ready to be rendered or stored
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session: String,
    pub league_date: String,
    pub label: String,
    pub is_tryouts: bool,
    pub groups: Vec<GroupReport>,
    /// Seed order within each group, groups in session order
    pub rating_updates: Vec<RatingUpdate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group_number: u32,
    pub name: String,
    pub players: Vec<PlayerReport>,
    pub matches: Vec<MatchRecord>,
    pub standings: Vec<StandingsGroup>,
    pub prize_points: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerReport {
    pub seed: char,
    pub name: String,
    pub base_rating: RatingValue,
    pub final_rating: RatingValue,
    pub rating_change: RatingValue,
    pub matches_won: u32,
    pub games_won: u32,
    pub winner: bool,
}

impl SessionReport {
    pub fn new(session: &str, name: &SessionName, groups: Vec<GroupReport>) -> Self {
        let rating_updates = groups
            .iter()
            .flat_map(|g| &g.players)
            .map(|p| RatingUpdate {
                name: p.name.clone(),
                rating: p.final_rating,
            })
            .collect();

        Self {
            session: session.to_string(),
            league_date: name.league_date(),
            label: name.label.clone(),
            is_tryouts: name.is_tryouts,
            groups,
            rating_updates,
        }
    }

    /// All groups' awards in one map; a name in two groups keeps the later award
    pub fn prize_points(&self) -> PrizeMap {
        self.groups
            .iter()
            .flat_map(|g| g.prize_points.iter())
            .map(|(name, points)| (name.clone(), *points))
            .collect()
    }

    pub fn title(&self) -> String {
        format!("League Summary - {}", self.label)
    }

    pub fn description(winner_mark: &str) -> String {
        format!(
            "Group winners (denoted by {}) are promoted to the next higher table during the next week if they are present.",
            winner_mark
        )
    }
}

impl GroupReport {
    pub fn new(
        ledger: &MatchLedger,
        standings: Vec<StandingsGroup>,
        prize_points: PrizeMap,
    ) -> Self {
        let group = ledger.group();
        let winners = standings::winners(&standings);

        let players = group
            .players()
            .iter()
            .enumerate()
            .map(|(index, p)| PlayerReport {
                seed: schedule::seed_letter(index).unwrap_or('?'),
                name: p.name.clone(),
                base_rating: p.base_rating,
                final_rating: p.final_rating,
                rating_change: p.rating_change,
                matches_won: p.matches_won,
                games_won: p.games_won,
                winner: winners.contains(&p.name.as_str()),
            })
            .collect();

        Self {
            group_number: group.group_number,
            name: group.name(),
            players,
            matches: ledger.records().to_vec(),
            standings,
            prize_points: prize_points.into_iter().collect(),
        }
    }

    pub fn header() -> String {
        format!(
            "{:<4} {:<24} {:>13} {:>11} {:>13} {:>12}",
            "Seed", "Player", "Rating Before", "Matches Won", "Rating Change", "Rating After"
        )
    }

    /// One summary row per player in seed order, winners carrying the mark
    pub fn rows(&self, winner_mark: &str) -> Vec<(bool, String)> {
        self.players
            .iter()
            .map(|p| {
                let name = if p.winner {
                    format!("{}{}", p.name, winner_mark)
                } else {
                    p.name.clone()
                };
                let line = format!(
                    "{:<4} {:<24} {:>13} {:>11} {:>+13} {:>12}",
                    p.seed, name, p.base_rating, p.matches_won, p.rating_change, p.final_rating
                );
                (p.winner, line)
            })
            .collect()
    }
}
