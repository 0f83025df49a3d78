use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::PrizePointTotals;
use crate::errors::store_context;
use crate::prize_points::PrizeMap;

/// Store one session's awards under its league date. Re-recording the same
/// session replaces the earlier values.
pub fn record_awards(conn: &mut DbConn, league_date: &str, awards: &PrizeMap) -> Result<usize> {
    let sql = "INSERT INTO prize_points (name, league_date, points) VALUES (?1, ?2, ?3) \
         ON CONFLICT(name, league_date) DO UPDATE SET points = excluded.points";

    // name order keeps the write sequence reproducible
    let mut names: Vec<&String> = awards.keys().collect();
    names.sort();

    let tx = conn
        .transaction()
        .context("Failed to start prize-point transaction")?;
    for name in &names {
        tx.execute(sql, params![name, league_date, awards[*name]])
            .with_context(|| store_context("record prize points", name))?;
    }
    tx.commit().context("Failed to commit prize points")?;

    log::info!("Recorded prize points for {} players on {}", names.len(), league_date);
    Ok(names.len())
}

pub fn record_used(conn: &mut DbConn, name: &str, points: u32) -> Result<()> {
    let sql = "INSERT INTO points_used (name, points) VALUES (?1, ?2)";

    conn.execute(sql, params![name, points])
        .with_context(|| store_context("record used prize points", name))
        .map(|_| ())
}

/// Earned, used and remaining points for everyone with any history
pub fn totals(conn: &mut DbConn) -> Result<Vec<PrizePointTotals>> {
    let sql = "SELECT name, SUM(earned), SUM(used) FROM ( \
             SELECT name, points AS earned, 0 AS used FROM prize_points \
             UNION ALL \
             SELECT name, 0 AS earned, points AS used FROM points_used \
         ) GROUP BY name ORDER BY name ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_totals_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to total prize points")?;

    Ok(rows)
}

fn parse_totals_row(row: &rusqlite::Row) -> rusqlite::Result<PrizePointTotals> {
    let earned: i64 = row.get(1)?;
    let used: i64 = row.get(2)?;
    Ok(PrizePointTotals {
        name: row.get(0)?,
        earned,
        used,
        remaining: earned - used,
    })
}
