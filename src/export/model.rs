use crate::models::Record;
use crate::utils::time::{format_date, format_timestamp};
use serde::Serialize;

/// Flat, text-only row for CSV export of a filtered subset.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub endpoint_id: i64,
    pub client_name: String,
    pub endpoint_name: String,
    pub shift_day: String,
    pub calendar_day: String,
    pub state: String,
    pub status: String,
    pub reason: String,
    pub state_begin: String,
    pub state_end: String,
    pub duration_hour: f64,
    pub duration_min: f64,
    pub color: String,
    pub period_name: String,
    pub shift_name: String,
    pub operator: String,
    pub operator_auth_start: String,
    pub operator_auth_end: String,
    pub shift_begin: String,
    pub shift_end: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        let opt_ts = |ts: &Option<chrono::NaiveDateTime>| {
            ts.as_ref().map(format_timestamp).unwrap_or_default()
        };
        Self {
            endpoint_id: r.endpoint_id,
            client_name: r.client_name.clone(),
            endpoint_name: r.endpoint_name.clone(),
            shift_day: format_date(&r.shift_day),
            calendar_day: format_date(&r.calendar_day),
            state: r.state.clone(),
            status: r.status.clone(),
            reason: r.reason.clone(),
            state_begin: format_timestamp(&r.state_begin),
            state_end: format_timestamp(&r.state_end),
            duration_hour: r.duration_hour,
            duration_min: r.duration_min,
            color: r.color.clone(),
            period_name: r.period_name.clone(),
            shift_name: r.shift_name.clone(),
            operator: r.operator.clone(),
            operator_auth_start: opt_ts(&r.operator_auth_start),
            operator_auth_end: opt_ts(&r.operator_auth_end),
            shift_begin: r.shift_begin.format("%H:%M:%S").to_string(),
            shift_end: r.shift_end.format("%H:%M:%S").to_string(),
        }
    }
}
