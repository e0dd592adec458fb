pub mod browse;
pub mod config;
pub mod db;
pub mod init;
pub mod options;
pub mod view;

use crate::config::Config;
use crate::db::{RecordSource, SqliteSource};
use crate::errors::AppResult;
use crate::models::RecordSet;

/// Load the full record set once for the command.
pub(crate) fn load_records(cfg: &Config) -> AppResult<RecordSet> {
    SqliteSource::new(cfg.database.clone(), cfg.table.clone())?.fetch_all()
}
