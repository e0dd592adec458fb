//! Read-only access to the records table.

use crate::db::pool::DbPool;
use crate::db::queries::{load_all_records, validate_table_name};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordSet};
use std::path::Path;
use tracing::{debug, warn};

/// Anything able to hand over the full record set.
pub trait RecordSource {
    fn fetch_all(&self) -> AppResult<RecordSet>;
}

/// Record source backed by a SQLite table.
pub struct SqliteSource {
    path: String,
    table: String,
}

impl SqliteSource {
    pub fn new(path: impl Into<String>, table: impl Into<String>) -> AppResult<Self> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self {
            path: path.into(),
            table,
        })
    }
}

impl RecordSource for SqliteSource {
    fn fetch_all(&self) -> AppResult<RecordSet> {
        if !Path::new(&self.path).exists() {
            return Err(AppError::DataAccess(rusqlite::Error::InvalidPath(
                self.path.clone().into(),
            )));
        }

        let pool = DbPool::open_read_only(&self.path)?;
        let rows = load_all_records(&pool.conn, &self.table)?;

        let disordered = rows.iter().filter(|r| !r.is_well_ordered()).count();
        if disordered > 0 {
            warn!(
                table = %self.table,
                disordered,
                "rows with state_begin after state_end"
            );
        }

        debug!(path = %self.path, table = %self.table, rows = rows.len(), "fetched records");
        Ok(RecordSet::new(rows))
    }
}

/// In-memory source for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<Record>,
}

impl StaticSource {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }
}

impl RecordSource for StaticSource {
    fn fetch_all(&self) -> AppResult<RecordSet> {
        Ok(RecordSet::new(self.rows.clone()))
    }
}
