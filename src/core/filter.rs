//! Cascading selection over a record set: client → endpoint → shift day →
//! period bounds → confirm.
//!
//! Each stage's valid choices are a pure function of the full record set and
//! the selections made so far. [`FilterMachine`] wraps those functions in an
//! explicit state machine driven by discrete [`FilterEvent`]s.

use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordSet};
use crate::utils::time::{format_date, format_period};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info};

/// A selectable value together with the label shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: T,
}

/// The begin/end choices offered once a shift day is chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodOptions {
    pub begin: SelectOption<NaiveDateTime>,
    pub end: SelectOption<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Client,
    Endpoint,
    ShiftDay,
    PeriodBegin,
    PeriodEnd,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Client => "client",
            Stage::Endpoint => "endpoint",
            Stage::ShiftDay => "shift day",
            Stage::PeriodBegin => "period begin",
            Stage::PeriodEnd => "period end",
        }
    }
}

/// Partially filled selection; fields are filled in stage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub client_name: Option<String>,
    pub endpoint_name: Option<String>,
    pub shift_day: Option<NaiveDate>,
    pub state_begin: Option<NaiveDateTime>,
    pub state_end: Option<NaiveDateTime>,
}

impl FilterSelection {
    /// Stages still unanswered, in order.
    pub fn missing(&self) -> Vec<Stage> {
        let mut out = Vec::new();
        if self.client_name.is_none() {
            out.push(Stage::Client);
        }
        if self.endpoint_name.is_none() {
            out.push(Stage::Endpoint);
        }
        if self.shift_day.is_none() {
            out.push(Stage::ShiftDay);
        }
        if self.state_begin.is_none() {
            out.push(Stage::PeriodBegin);
        }
        if self.state_end.is_none() {
            out.push(Stage::PeriodEnd);
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Conjunction of every field that is set. Adding a field can only
    /// shrink the matching subset.
    pub fn matches(&self, r: &Record) -> bool {
        self.client_name.as_ref().is_none_or(|c| &r.client_name == c)
            && self
                .endpoint_name
                .as_ref()
                .is_none_or(|e| &r.endpoint_name == e)
            && self.shift_day.is_none_or(|d| r.shift_day == d)
            && self.state_begin.is_none_or(|b| r.state_begin >= b)
            && self.state_end.is_none_or(|e| r.state_end <= e)
    }

    fn clear_after(&mut self, stage: Stage) {
        match stage {
            Stage::Client => {
                self.endpoint_name = None;
                self.shift_day = None;
                self.state_begin = None;
                self.state_end = None;
            }
            Stage::Endpoint => {
                self.shift_day = None;
                self.state_begin = None;
                self.state_end = None;
            }
            Stage::ShiftDay => {
                self.state_begin = None;
                self.state_end = None;
            }
            Stage::PeriodBegin | Stage::PeriodEnd => {}
        }
    }
}

fn incomplete(stages: &[Stage]) -> AppError {
    AppError::IncompleteSelection(stages.iter().map(Stage::label).collect())
}

/// Records matching whatever part of the selection is set.
pub fn filter(records: &RecordSet, selection: &FilterSelection) -> RecordSet {
    records.filter(|r| selection.matches(r))
}

pub fn client_options(records: &RecordSet) -> Vec<String> {
    records.distinct(|r| r.client_name.clone())
}

pub fn endpoint_options(records: &RecordSet, client: &str) -> Vec<String> {
    records
        .filter(|r| r.client_name == client)
        .distinct(|r| r.endpoint_name.clone())
}

pub fn shift_day_options(
    records: &RecordSet,
    client: &str,
    endpoint: &str,
) -> Vec<SelectOption<NaiveDate>> {
    records
        .filter(|r| r.client_name == client && r.endpoint_name == endpoint)
        .distinct(|r| r.shift_day)
        .into_iter()
        .map(|day| SelectOption {
            label: format_date(&day),
            value: day,
        })
        .collect()
}

/// Earliest begin and latest end for a client/endpoint/shift day.
pub fn period_options(
    records: &RecordSet,
    client: &str,
    endpoint: &str,
    shift_day: NaiveDate,
) -> AppResult<PeriodOptions> {
    let subset = records.filter(|r| {
        r.client_name == client && r.endpoint_name == endpoint && r.shift_day == shift_day
    });

    let begin = subset.iter().map(|r| r.state_begin).min();
    let end = subset.iter().map(|r| r.state_end).max();

    match (begin, end) {
        (Some(begin), Some(end)) => Ok(PeriodOptions {
            begin: SelectOption {
                label: format_period(&begin),
                value: begin,
            },
            end: SelectOption {
                label: format_period(&end),
                value: end,
            },
        }),
        _ => Err(AppError::NoMatchingRecords),
    }
}

/// Final subset for a complete selection.
pub fn confirm(records: &RecordSet, selection: &FilterSelection) -> AppResult<RecordSet> {
    let missing = selection.missing();
    if !missing.is_empty() {
        return Err(incomplete(&missing));
    }

    let subset = filter(records, selection);
    if subset.is_empty() {
        return Err(AppError::NoMatchingRecords);
    }
    Ok(subset)
}

/// User input driving the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SelectClient(String),
    SelectEndpoint(String),
    SelectShiftDay(NaiveDate),
    SelectBegin(NaiveDateTime),
    SelectEnd(NaiveDateTime),
    Confirm,
    Reset,
}

/// What the surface should show after a transition.
#[derive(Debug, Clone)]
pub enum StageOutput {
    Clients(Vec<String>),
    Endpoints(Vec<String>),
    ShiftDays(Vec<SelectOption<NaiveDate>>),
    Period(PeriodOptions),
    /// A period bound was set; the next unanswered stage, if any.
    Awaiting(Option<Stage>),
    Confirmed(RecordSet),
}

/// Explicit selection state over a shared, read-only record set.
#[derive(Debug, Clone)]
pub struct FilterMachine {
    records: RecordSet,
    selection: FilterSelection,
}

impl FilterMachine {
    pub fn new(records: RecordSet) -> Self {
        Self {
            records,
            selection: FilterSelection::default(),
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// First unanswered stage, `None` when confirm is possible.
    pub fn stage(&self) -> Option<Stage> {
        self.selection.missing().first().copied()
    }

    /// Choices for the current stage without changing anything.
    pub fn current_options(&self) -> AppResult<StageOutput> {
        let sel = &self.selection;
        match (&sel.client_name, &sel.endpoint_name, sel.shift_day) {
            (None, _, _) => Ok(StageOutput::Clients(client_options(&self.records))),
            (Some(c), None, _) => Ok(StageOutput::Endpoints(endpoint_options(&self.records, c))),
            (Some(c), Some(e), None) => Ok(StageOutput::ShiftDays(shift_day_options(
                &self.records,
                c,
                e,
            ))),
            (Some(c), Some(e), Some(d)) => {
                Ok(StageOutput::Period(period_options(&self.records, c, e, d)?))
            }
        }
    }

    /// Apply one event. On error the selection is left as it was.
    pub fn apply(&mut self, event: FilterEvent) -> AppResult<StageOutput> {
        let result = self.transition(event.clone());
        match &result {
            Ok(_) => debug!(?event, selection = ?self.selection, "filter transition"),
            Err(e) => info!(?event, error = %e, "filter transition rejected"),
        }
        result
    }

    fn transition(&mut self, event: FilterEvent) -> AppResult<StageOutput> {
        match event {
            FilterEvent::SelectClient(client) => {
                if !client_options(&self.records).contains(&client) {
                    return Err(AppError::InvalidChoice {
                        stage: Stage::Client.label(),
                        value: client,
                    });
                }
                let endpoints = endpoint_options(&self.records, &client);
                self.selection.client_name = Some(client);
                self.selection.clear_after(Stage::Client);
                Ok(StageOutput::Endpoints(endpoints))
            }

            FilterEvent::SelectEndpoint(endpoint) => {
                let client = self.require_client()?;
                if !endpoint_options(&self.records, &client).contains(&endpoint) {
                    return Err(AppError::InvalidChoice {
                        stage: Stage::Endpoint.label(),
                        value: endpoint,
                    });
                }
                let days = shift_day_options(&self.records, &client, &endpoint);
                self.selection.endpoint_name = Some(endpoint);
                self.selection.clear_after(Stage::Endpoint);
                Ok(StageOutput::ShiftDays(days))
            }

            FilterEvent::SelectShiftDay(day) => {
                let client = self.require_client()?;
                let endpoint = self
                    .selection
                    .endpoint_name
                    .clone()
                    .ok_or_else(|| incomplete(&[Stage::Endpoint]))?;
                if !shift_day_options(&self.records, &client, &endpoint)
                    .iter()
                    .any(|o| o.value == day)
                {
                    return Err(AppError::InvalidChoice {
                        stage: Stage::ShiftDay.label(),
                        value: format_date(&day),
                    });
                }
                let period = period_options(&self.records, &client, &endpoint, day)?;
                self.selection.shift_day = Some(day);
                self.selection.clear_after(Stage::ShiftDay);
                Ok(StageOutput::Period(period))
            }

            // Bounds may be overridden freely once the shift day is known.
            FilterEvent::SelectBegin(ts) => {
                self.require_shift_day()?;
                self.selection.state_begin = Some(ts);
                Ok(StageOutput::Awaiting(self.stage()))
            }

            FilterEvent::SelectEnd(ts) => {
                self.require_shift_day()?;
                self.selection.state_end = Some(ts);
                Ok(StageOutput::Awaiting(self.stage()))
            }

            FilterEvent::Confirm => {
                confirm(&self.records, &self.selection).map(StageOutput::Confirmed)
            }

            FilterEvent::Reset => {
                self.selection = FilterSelection::default();
                Ok(StageOutput::Clients(client_options(&self.records)))
            }
        }
    }

    fn require_client(&self) -> AppResult<String> {
        self.selection
            .client_name
            .clone()
            .ok_or_else(|| incomplete(&[Stage::Client]))
    }

    fn require_shift_day(&self) -> AppResult<NaiveDate> {
        let missing: Vec<Stage> = self
            .selection
            .missing()
            .into_iter()
            .take_while(|s| *s != Stage::PeriodBegin)
            .collect();
        if !missing.is_empty() {
            return Err(incomplete(&missing));
        }
        self.selection
            .shift_day
            .ok_or_else(|| incomplete(&[Stage::ShiftDay]))
    }
}
