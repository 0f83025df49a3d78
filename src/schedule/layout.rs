use serde::Serialize;

use super::table::{schedule_for, Pairing};
use crate::errors::LeagueError;

const FIRST_DATA_ROW: usize = 4;
const ROWS_PER_MATCH: usize = 3;

/// Where one match lands on the match-record sheet (1-based rows)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    pub index: usize,
    pub pairing: String,
    pub spacer_row: usize,
    pub first_row: usize,
    pub second_row: usize,
}

/// Row layout for a group: title on row 1, headers on row 2, then a merged
/// spacer row followed by one row per player for each match
pub fn row_layout(size: usize) -> Result<Vec<MatchRow>, LeagueError> {
    let schedule = schedule_for(size)?;
    Ok(schedule.iter().enumerate().map(|(i, p)| build_row(i, p)).collect())
}

fn build_row(index: usize, pairing: &Pairing) -> MatchRow {
    let first_row = FIRST_DATA_ROW + ROWS_PER_MATCH * index;
    MatchRow {
        index,
        pairing: pairing.to_string(),
        spacer_row: first_row - 1,
        first_row,
        second_row: first_row + 1,
    }
}
