use anyhow::{Context, Result};

use super::connection::DbConn;

/// Create any missing tables. Safe to run on every start.
pub fn initialize_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::debug!("League store schema ready ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
