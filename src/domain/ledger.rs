use log::debug;
use serde::Serialize;

use super::models::Group;
use super::score::{MatchScore, Side};
use crate::errors::LeagueError;
use crate::rating::{self, Outcome, RatingUpdate, RatingValue};
use crate::schedule::{self, Pairing};

/// One row of the match record: a scheduled pairing and what it did to ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub index: usize,
    pub pairing: String,
    pub first_name: String,
    pub second_name: String,
    pub first_rating: RatingValue,
    pub second_rating: RatingValue,
    pub score: MatchScore,
    /// Change for the first-listed player; the second gets the negation
    pub point_change: RatingValue,
}

/// Resolve one match into the two players it involves.
///
/// Void scores register nothing. Level non-zero scores add games but award
/// no match and move no rating. Point changes always come from base ratings.
pub fn apply_match(
    group: &mut Group,
    pairing: Pairing,
    score: MatchScore,
) -> Result<RatingValue, LeagueError> {
    if !score.is_within_bounds() {
        return Err(LeagueError::MalformedMatchResult(score.to_string()));
    }
    let (first, second) = group.pair_mut(pairing)?;
    if score.is_void() {
        return Ok(0);
    }

    first.games_won += score.first;
    second.games_won += score.second;

    let point_change = match score.winner() {
        Some(Side::First) => {
            first.matches_won += 1;
            winner_gain(first.base_rating, second.base_rating)
        }
        Some(Side::Second) => {
            second.matches_won += 1;
            -winner_gain(second.base_rating, first.base_rating)
        }
        None => rating::rating_delta(first.base_rating, second.base_rating, Outcome::Tie),
    };

    first.adjust_rating(point_change);
    second.adjust_rating(-point_change);
    Ok(point_change)
}

fn winner_gain(winner: RatingValue, loser: RatingValue) -> RatingValue {
    rating::rating_delta(winner, loser, Outcome::Win).abs()
}

/// A group after every scheduled match has been applied in schedule order
#[derive(Debug, Clone, Serialize)]
pub struct MatchLedger {
    group: Group,
    results: Vec<MatchScore>,
    records: Vec<MatchRecord>,
}

impl MatchLedger {
    pub fn record(mut group: Group, results: Vec<MatchScore>) -> Result<Self, LeagueError> {
        let schedule = group.schedule()?;
        if results.len() != schedule.len() {
            return Err(LeagueError::ResultCountMismatch {
                expected: schedule.len(),
                actual: results.len(),
            });
        }

        let mut records = Vec::with_capacity(schedule.len());
        for (index, (&pairing, &score)) in schedule.iter().zip(&results).enumerate() {
            let point_change = apply_match(&mut group, pairing, score)?;
            debug!("{} {} {} -> {:+}", group.name(), pairing, score, point_change);
            records.push(build_record(&group, index, pairing, score, point_change)?);
        }

        Ok(Self {
            group,
            results,
            records,
        })
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn results(&self) -> &[MatchScore] {
        &self.results
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn head_to_head(&self, a: char, b: char) -> Result<Option<MatchScore>, LeagueError> {
        let schedule = self.group.schedule()?;
        Ok(head_to_head(&schedule, &self.results, a, b))
    }

    /// Final ratings in seed order, for the roster writer
    pub fn rating_updates(&self) -> Vec<RatingUpdate> {
        self.group
            .players()
            .iter()
            .map(|p| RatingUpdate {
                name: p.name.clone(),
                rating: p.final_rating,
            })
            .collect()
    }
}

/// Score of the match between two seeds, oriented so `a`'s games come first
pub fn head_to_head(
    schedule: &[Pairing],
    results: &[MatchScore],
    a: char,
    b: char,
) -> Option<MatchScore> {
    let index = schedule::find_pairing(schedule, a, b)?;
    let score = *results.get(index)?;
    if schedule[index].first == a {
        Some(score)
    } else {
        Some(score.flipped())
    }
}

fn build_record(
    group: &Group,
    index: usize,
    pairing: Pairing,
    score: MatchScore,
    point_change: RatingValue,
) -> Result<MatchRecord, LeagueError> {
    let first = group.player(pairing.first)?;
    let second = group.player(pairing.second)?;
    Ok(MatchRecord {
        index,
        pairing: pairing.to_string(),
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        first_rating: first.base_rating,
        second_rating: second.base_rating,
        score,
        point_change,
    })
}
