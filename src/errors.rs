//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so the front end can
//! decide in one place which failures are recoverable.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("Data access error: {0}")]
    DataAccess(#[from] rusqlite::Error),

    #[error("Malformed source data: {0}")]
    DataFormat(String),

    // ---------------------------
    // Filter state machine
    // ---------------------------
    #[error("Incomplete selection, missing: {}", .0.join(", "))]
    IncompleteSelection(Vec<&'static str>),

    #[error("No records match the selected parameters")]
    NoMatchingRecords,

    #[error("'{value}' is not a valid {stage}")]
    InvalidChoice { stage: &'static str, value: String },

    // ---------------------------
    // View model
    // ---------------------------
    #[error("Cannot build a view from an empty record set")]
    EmptyView,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Errors the user can fix by changing the selection; the session goes on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::IncompleteSelection(_)
                | AppError::NoMatchingRecords
                | AppError::InvalidChoice { .. }
                | AppError::InvalidDate(_)
                | AppError::InvalidTimestamp(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
