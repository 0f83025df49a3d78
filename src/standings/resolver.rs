use serde::Serialize;

use crate::domain::ledger::head_to_head;
use crate::domain::{Group, MatchScore, Player, Side};
use crate::errors::LeagueError;
use crate::schedule::{self, Pairing};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub seed: char,
    pub name: String,
    pub matches_won: u32,
    pub games_won: u32,
}

/// Players judged equal after tie-breaking. `position` is the 1-based rank
/// of the block's first place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsGroup {
    pub position: usize,
    pub members: Vec<Standing>,
}

impl StandingsGroup {
    pub fn is_tie(&self) -> bool {
        self.members.len() > 1
    }

    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Rank a finished group: matches won, then games won, then the head-to-head
/// match for a two-way tie. Ties of three or more are accepted as they are.
pub fn resolve(group: &Group, results: &[MatchScore]) -> Result<Vec<StandingsGroup>, LeagueError> {
    let schedule = group.schedule()?;
    let ordered = order_by_record(group)?;

    let mut standings = Vec::with_capacity(ordered.len());
    let mut position = 1;
    for block in ordered.chunk_by(|a, b| record_of(a) == record_of(b)) {
        for members in break_tie(block, &schedule, results) {
            let width = members.len();
            standings.push(StandingsGroup { position, members });
            position += width;
        }
    }
    Ok(standings)
}

/// Members of the first standings group
pub fn winners(standings: &[StandingsGroup]) -> Vec<&str> {
    standings.first().map(StandingsGroup::names).unwrap_or_default()
}

fn order_by_record(group: &Group) -> Result<Vec<Standing>, LeagueError> {
    let mut ordered = group
        .players()
        .iter()
        .enumerate()
        .map(|(index, player)| to_standing(index, player))
        .collect::<Result<Vec<_>, _>>()?;
    // stable, so equal records stay in seed order
    ordered.sort_by(|a, b| record_of(b).cmp(&record_of(a)));
    Ok(ordered)
}

fn to_standing(index: usize, player: &Player) -> Result<Standing, LeagueError> {
    let seed = schedule::seed_letter(index).ok_or(LeagueError::UnsupportedGroupSize(index + 1))?;
    Ok(Standing {
        seed,
        name: player.name.clone(),
        matches_won: player.matches_won,
        games_won: player.games_won,
    })
}

fn record_of(standing: &Standing) -> (u32, u32) {
    (standing.matches_won, standing.games_won)
}

fn break_tie(
    block: &[Standing],
    schedule: &[Pairing],
    results: &[MatchScore],
) -> Vec<Vec<Standing>> {
    match block {
        [a, b] => match head_to_head(schedule, results, a.seed, b.seed).and_then(|s| s.winner()) {
            Some(Side::First) => vec![vec![a.clone()], vec![b.clone()]],
            Some(Side::Second) => vec![vec![b.clone()], vec![a.clone()]],
            None => vec![block.to_vec()],
        },
        _ => vec![block.to_vec()],
    }
}
