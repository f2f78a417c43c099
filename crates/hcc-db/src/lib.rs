//! # hcc-db
//!
//! Pooled Oracle catalog gateway for the HCC Compression Advisor.
//!
//! Owns the bounded r2d2 connection pool to the advisor catalog and exposes
//! the query/DML/procedure operations the dashboard needs. Failures never
//! cross this boundary as raw Oracle errors: each operation logs the problem
//! and returns a safe default (empty rows, zero affected, `false`), so one
//! failed call can only cost the caller its own action.
//!
//! Every operation scopes its pooled connection to the operation body; the
//! checkout handle returns the connection to the pool on every exit path,
//! including early returns and panics.

mod error;
mod manager;

pub use error::DbError;
pub use manager::CatalogConnectionManager;

use hcc_config::DatabaseConfig;
use oracle::sql_type::ToSql;

/// Segment and compression statistics for one table, read from `ALL_TABLES`.
const TABLE_STATISTICS_SQL: &str = "\
    SELECT num_rows,
           blocks,
           avg_row_len,
           compress_for,
           compression,
           ROUND(blocks * 8192 / 1024 / 1024, 2) AS size_mb
    FROM all_tables
    WHERE owner = :1
      AND table_name = :2";

// ── Types ──────────────────────────────────────────────────────────

/// Rows and column names from one query, display-ready.
///
/// Values are rendered to strings at the gateway boundary; `None` marks SQL
/// NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    /// Whether the result carries no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Catalog statistics for one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStatistics {
    pub num_rows: Option<u64>,
    pub blocks: Option<u64>,
    pub avg_row_len: Option<u64>,
    pub compress_for: Option<String>,
    pub compression: Option<String>,
    pub size_mb: Option<f64>,
}

// ── Gateway ────────────────────────────────────────────────────────

/// Catalog database gateway over a bounded connection pool.
///
/// Constructed once at startup and shared for the process lifetime. The pool
/// caps concurrently checked-out connections at the configured `pool_max`;
/// a caller asking for one more blocks until a prior checkout is released.
pub struct DbGateway {
    pool: Option<r2d2::Pool<CatalogConnectionManager>>,
}

impl DbGateway {
    /// Build the connection pool and verify the catalog is reachable.
    ///
    /// Pool sizing is validated first (`pool_min` at least 1, `pool_max` not
    /// below it). Pool construction blocks until the minimum number of
    /// connections is established, so an unreachable catalog surfaces here
    /// rather than on first use. Not retried internally; retry is the
    /// caller's decision.
    ///
    /// # Errors
    ///
    /// [`DbError::InvalidPoolSize`] on bad sizing, [`DbError::Pool`] if the
    /// catalog cannot be reached.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let problems = config.pool_problems();
        if !problems.is_empty() {
            return Err(DbError::InvalidPoolSize(problems.join("; ")));
        }

        let manager = CatalogConnectionManager::from_config(config);
        let pool = r2d2::Pool::builder()
            .max_size(config.pool_max)
            .min_idle(Some(config.pool_min))
            .build(manager)?;

        tracing::debug!(
            min = config.pool_min,
            max = config.pool_max,
            "catalog connection pool initialized"
        );
        Ok(Self { pool: Some(pool) })
    }

    /// Run a parameterized SELECT.
    ///
    /// On any failure the error is logged and an empty [`QueryResult`] is
    /// returned; nothing propagates past the gateway.
    pub fn query(&self, sql: &str, params: &[&dyn ToSql]) -> QueryResult {
        match self.try_query(sql, params) {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(%error, "query execution failed");
                QueryResult::default()
            }
        }
    }

    /// Run a parameterized INSERT/UPDATE/DELETE, returning rows affected.
    ///
    /// Commits only on the success branch when `commit` is set. On failure
    /// the error is logged and 0 is returned.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql], commit: bool) -> u64 {
        match self.try_execute(sql, params, commit) {
            Ok(count) => count,
            Err(error) => {
                tracing::error!(%error, "DML execution failed");
                0
            }
        }
    }

    /// Call a stored procedure with positional parameters.
    ///
    /// Commits on success. Returns `false` (after logging) on failure.
    pub fn call_procedure(&self, name: &str, params: &[&dyn ToSql]) -> bool {
        match self.try_call_procedure(name, params) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(%error, procedure = name, "procedure call failed");
                false
            }
        }
    }

    /// Probe the catalog with `SELECT 1 FROM DUAL`.
    ///
    /// Never errors; any underlying failure is logged and reported as
    /// `false`.
    pub fn test_connection(&self) -> bool {
        match self.try_query("SELECT 1 FROM DUAL", &[]) {
            Ok(result) => !result.is_empty(),
            Err(error) => {
                tracing::error!(%error, "connection test failed");
                false
            }
        }
    }

    /// Look up segment statistics for one table in `ALL_TABLES`.
    ///
    /// Returns `None` when the table is unknown or the lookup fails.
    pub fn table_statistics(&self, owner: &str, table_name: &str) -> Option<TableStatistics> {
        match self.try_table_statistics(owner, table_name) {
            Ok(stats) => stats,
            Err(error) => {
                tracing::error!(%error, owner, table = table_name, "table statistics lookup failed");
                None
            }
        }
    }

    /// Close the pool. Idempotent; operations on a closed gateway report
    /// failure like any other connectivity problem.
    pub fn close(&mut self) {
        if self.pool.take().is_some() {
            tracing::debug!("catalog connection pool closed");
        }
    }

    fn checkout(&self) -> Result<r2d2::PooledConnection<CatalogConnectionManager>, DbError> {
        let pool = self.pool.as_ref().ok_or(DbError::Closed)?;
        Ok(pool.get()?)
    }

    fn try_query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<QueryResult, DbError> {
        let conn = self.checkout()?;
        let rows = conn.query(sql, params)?;
        let columns: Vec<String> = rows
            .column_info()
            .iter()
            .map(|info| info.name().to_string())
            .collect();

        let mut out = Vec::new();
        for row in rows {
            let row = row?;
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                values.push(row.get::<usize, Option<String>>(index)?);
            }
            out.push(values);
        }
        Ok(QueryResult { columns, rows: out })
    }

    fn try_execute(&self, sql: &str, params: &[&dyn ToSql], commit: bool) -> Result<u64, DbError> {
        let conn = self.checkout()?;
        let statement = conn.execute(sql, params)?;
        let count = statement.row_count()?;
        if commit {
            conn.commit()?;
        }
        Ok(count)
    }

    fn try_call_procedure(&self, name: &str, params: &[&dyn ToSql]) -> Result<(), DbError> {
        let block = procedure_block(name, params.len());
        let conn = self.checkout()?;
        conn.execute(&block, params)?;
        conn.commit()?;
        Ok(())
    }

    fn try_table_statistics(
        &self,
        owner: &str,
        table_name: &str,
    ) -> Result<Option<TableStatistics>, DbError> {
        let conn = self.checkout()?;
        let rows = conn.query(TABLE_STATISTICS_SQL, &[&owner, &table_name])?;
        for row in rows {
            let row = row?;
            return Ok(Some(TableStatistics {
                num_rows: row.get(0)?,
                blocks: row.get(1)?,
                avg_row_len: row.get(2)?,
                compress_for: row.get(3)?,
                compression: row.get(4)?,
                size_mb: row.get(5)?,
            }));
        }
        Ok(None)
    }

    #[cfg(test)]
    const fn detached() -> Self {
        Self { pool: None }
    }
}

/// Build the anonymous PL/SQL block that invokes `name` with `arity`
/// positional binds.
fn procedure_block(name: &str, arity: usize) -> String {
    let placeholders = (1..=arity)
        .map(|i| format!(":{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("BEGIN {name}({placeholders}); END;")
}
