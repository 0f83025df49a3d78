use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use super::setup;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Open the league store at `database_path` and make sure its tables exist
pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path);
    let pool = build_pool(manager, None)
        .with_context(|| format!("Failed to open league store at {}", database_path))?;
    prepare(&pool)?;
    Ok(pool)
}

/// A throwaway store. A single connection, since every `:memory:` connection
/// is its own database.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory();
    let pool = build_pool(manager, Some(1))?;
    prepare(&pool)?;
    Ok(pool)
}

fn build_pool(manager: SqliteConnectionManager, max_size: Option<u32>) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder();
    if let Some(size) = max_size {
        builder = builder.max_size(size);
    }
    builder
        .build(manager)
        .context("Failed to create database connection pool")
}

fn prepare(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    setup::initialize_schema(&mut conn)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
