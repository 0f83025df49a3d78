use std::collections::HashMap;

use crate::config::PrizePointSettings;
use crate::errors::LeagueError;
use crate::standings::StandingsGroup;

/// Player name to points earned in one session
pub type PrizeMap = HashMap<String, u32>;

/// Award prize points for a resolved group. Tied players share the ceiling of
/// the mean of the table slots their block covers.
pub fn allocate(
    standings: &[StandingsGroup],
    tier: u32,
    settings: &PrizePointSettings,
) -> Result<PrizeMap, LeagueError> {
    let table = settings.table_for(tier)?;
    let mut awards = PrizeMap::new();
    let mut rank = 0;

    for block in standings {
        let width = block.members.len();
        let value = slice_value(table, rank, width)?;
        for member in &block.members {
            awards.insert(member.name.clone(), value);
        }
        rank += width;
    }
    Ok(awards)
}

fn slice_value(table: &[u32], rank: usize, width: usize) -> Result<u32, LeagueError> {
    let slots = table
        .get(rank..rank + width)
        .filter(|slots| !slots.is_empty())
        .ok_or(LeagueError::RankOverflow {
            rank,
            width,
            table_len: table.len(),
        })?;
    let total: u32 = slots.iter().sum();
    let count = slots.len() as u32;
    Ok(total.div_ceil(count))
}
