use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One row of the `sources` table.
///
/// `endpoint_id` is the storage key but repeats across rows: one endpoint
/// produces many state occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub endpoint_id: i64,
    pub client_name: String,
    pub endpoint_name: String,
    pub shift_day: NaiveDate,    // ⇔ sources.shift_day (TEXT "YYYY-MM-DD")
    pub calendar_day: NaiveDate, // ⇔ sources.calendar_day
    pub state: String,
    pub status: String,
    pub reason: String,
    pub state_begin: NaiveDateTime, // ⇔ sources.state_begin (TEXT "YYYY-MM-DD HH:MM:SS[.f]")
    pub state_end: NaiveDateTime,
    pub duration_hour: f64,
    pub duration_min: f64,
    pub color: String,
    pub period_name: String,
    pub shift_name: String,
    pub operator: String,
    pub operator_auth_start: Option<NaiveDateTime>,
    pub operator_auth_end: Option<NaiveDateTime>,
    pub shift_begin: NaiveTime, // ⇔ sources.shift_begin (TEXT "HH:MM:SS[.f]")
    pub shift_end: NaiveTime,
}

impl Record {
    /// Build a record from the fields the dashboard actually reads.
    /// Derived columns (`calendar_day`, durations) are computed from the
    /// state interval; the rest start empty and can be set afterwards.
    pub fn new(
        client_name: &str,
        endpoint_name: &str,
        shift_day: NaiveDate,
        state_begin: NaiveDateTime,
        state_end: NaiveDateTime,
    ) -> Self {
        let minutes = (state_end - state_begin).num_seconds() as f64 / 60.0;
        Self {
            endpoint_id: 0,
            client_name: client_name.to_string(),
            endpoint_name: endpoint_name.to_string(),
            shift_day,
            calendar_day: state_begin.date(),
            state: String::new(),
            status: String::new(),
            reason: String::new(),
            state_begin,
            state_end,
            duration_hour: minutes / 60.0,
            duration_min: minutes,
            color: String::new(),
            period_name: String::new(),
            shift_name: String::new(),
            operator: String::new(),
            operator_auth_start: None,
            operator_auth_end: None,
            shift_begin: NaiveTime::MIN,
            shift_end: NaiveTime::MIN,
        }
    }

    pub fn with_state(mut self, state: &str, reason: &str, color: &str) -> Self {
        self.state = state.to_string();
        self.reason = reason.to_string();
        self.color = color.to_string();
        self
    }

    pub fn with_shift(mut self, shift_name: &str, operator: &str) -> Self {
        self.shift_name = shift_name.to_string();
        self.operator = operator.to_string();
        self
    }

    /// `state_begin <= state_end`; the timeline cannot draw anything else.
    pub fn is_well_ordered(&self) -> bool {
        self.state_begin <= self.state_end
    }
}
