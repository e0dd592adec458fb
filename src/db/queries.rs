use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::time::{parse_date, parse_datetime, parse_time};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row};

const COLUMNS: &str = "endpoint_id, client_name, endpoint_name, shift_day, calendar_day, \
     state, status, reason, state_begin, state_end, duration_hour, duration_min, color, \
     period_name, shift_name, operator, operator_auth_start, operator_auth_end, \
     shift_begin, shift_end";

/// Table names are interpolated into SQL, so only plain identifiers pass.
pub fn validate_table_name(table: &str) -> AppResult<()> {
    let ok = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !table.starts_with(|c: char| c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(AppError::Config(format!("invalid table name '{table}'")))
    }
}

/// Every row of `table`, in storage order.
pub fn load_all_records(conn: &Connection, table: &str) -> AppResult<Vec<Record>> {
    validate_table_name(table)?;

    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM {table}"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(into_data_error)?);
    }
    Ok(out)
}

/// Conversion failures carry the offending text; surface them as format
/// errors rather than opaque driver errors.
fn into_data_error(e: rusqlite::Error) -> AppError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => {
            AppError::DataFormat(inner.to_string())
        }
        other => AppError::DataAccess(other),
    }
}

fn conversion_error(idx: usize, column: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        format!("column {column}: unparsable value '{value}'").into(),
    )
}

fn text(row: &Row, idx: usize) -> Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn date_col(row: &Row, idx: usize, column: &str) -> Result<chrono::NaiveDate> {
    let raw: String = row.get(idx)?;
    parse_date(&raw).ok_or_else(|| conversion_error(idx, column, &raw))
}

fn datetime_col(row: &Row, idx: usize, column: &str) -> Result<chrono::NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_datetime(&raw).ok_or_else(|| conversion_error(idx, column, &raw))
}

fn opt_datetime_col(
    row: &Row,
    idx: usize,
    column: &str,
) -> Result<Option<chrono::NaiveDateTime>> {
    match row.get::<_, Option<String>>(idx)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| conversion_error(idx, column, &raw)),
    }
}

fn time_col(row: &Row, idx: usize, column: &str) -> Result<chrono::NaiveTime> {
    let raw: String = row.get(idx)?;
    parse_time(&raw).ok_or_else(|| conversion_error(idx, column, &raw))
}

pub fn map_row(row: &Row) -> Result<Record> {
    Ok(Record {
        endpoint_id: row.get(0)?,
        client_name: text(row, 1)?,
        endpoint_name: text(row, 2)?,
        shift_day: date_col(row, 3, "shift_day")?,
        calendar_day: date_col(row, 4, "calendar_day")?,
        state: text(row, 5)?,
        status: text(row, 6)?,
        reason: text(row, 7)?,
        state_begin: datetime_col(row, 8, "state_begin")?,
        state_end: datetime_col(row, 9, "state_end")?,
        duration_hour: row.get::<_, Option<f64>>(10)?.unwrap_or(0.0),
        duration_min: row.get::<_, Option<f64>>(11)?.unwrap_or(0.0),
        color: text(row, 12)?,
        period_name: text(row, 13)?,
        shift_name: text(row, 14)?,
        operator: text(row, 15)?,
        operator_auth_start: opt_datetime_col(row, 16, "operator_auth_start")?,
        operator_auth_end: opt_datetime_col(row, 17, "operator_auth_end")?,
        shift_begin: time_col(row, 18, "shift_begin")?,
        shift_end: time_col(row, 19, "shift_end")?,
    })
}
