mod dashboard_json;
mod fs_utils;
mod model;
mod record_csv;

pub use dashboard_json::write_dashboard_json;
pub use fs_utils::ensure_writable;
pub use record_csv::write_records_csv;
pub use model::RecordExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables
    Text,
    /// Full view model for an external renderer
    Json,
    /// Filtered records
    Csv,
}
