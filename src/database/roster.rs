use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::DbConn;
use super::models::{RankedEntry, RosterEntry};
use crate::errors::store_context;
use crate::rating::RatingUpdate;

const UPSERT_SQL: &str = "INSERT INTO roster (name, rating) VALUES (?1, ?2) \
     ON CONFLICT(name) DO UPDATE SET rating = excluded.rating, updated_at = CURRENT_TIMESTAMP \
     RETURNING id, name, rating, updated_at";

pub fn find_by_name(conn: &mut DbConn, name: &str) -> Result<Option<RosterEntry>> {
    let sql = "SELECT id, name, rating, updated_at FROM roster WHERE name = ?1";

    conn.query_row(sql, params![name], parse_roster_row)
        .optional()
        .with_context(|| store_context("look up roster entry", name))
}

/// Insert a new player or overwrite a returning player's rating
pub fn upsert_rating(conn: &mut DbConn, name: &str, rating: i32) -> Result<RosterEntry> {
    write_rating(conn, name, rating)
}

fn write_rating(conn: &Connection, name: &str, rating: i32) -> Result<RosterEntry> {
    conn.query_row(UPSERT_SQL, params![name, rating], parse_roster_row)
        .with_context(|| store_context("update rating", name))
}

fn parse_roster_row(row: &rusqlite::Row) -> rusqlite::Result<RosterEntry> {
    Ok(RosterEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

/// Whole roster, highest rating first, with 1-based ranks
pub fn list_ranked(conn: &mut DbConn) -> Result<Vec<RankedEntry>> {
    let sql = "SELECT name, rating FROM roster ORDER BY rating DESC, name ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list roster")?;

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(idx, (name, rating))| RankedEntry {
            rank: idx + 1,
            name,
            rating,
        })
        .collect())
}

/// Write a session's rating updates in order, all or nothing
pub fn apply_updates(conn: &mut DbConn, updates: &[RatingUpdate]) -> Result<usize> {
    let tx = conn
        .transaction()
        .context("Failed to start roster transaction")?;
    for update in updates {
        write_rating(&tx, &update.name, update.rating)?;
    }
    tx.commit().context("Failed to commit roster updates")?;

    log::info!("Wrote {} rating updates to the roster", updates.len());
    Ok(updates.len())
}
