//! View model built from a confirmed, non-empty subset.

use crate::core::diagram::{
    AxisTick, FULL_OPACITY, PieChart, PieSlice, TimelineBar, TimelineDiagram, TimelineSeries,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordSet};
use crate::utils::formatting::format_duration_min;
use crate::utils::time::{TICK_FMT, format_period, format_short_day};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

pub const DIAGRAM_TITLE: &str = "States timeline";

/// Reason → display color. Built positionally, so a reason seen with several
/// colors keeps the color of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorMap(BTreeMap<String, String>);

impl ColorMap {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut map = BTreeMap::new();
        for r in records {
            map.insert(r.reason.clone(), r.color.clone());
        }
        ColorMap(map)
    }

    pub fn get(&self, reason: &str) -> Option<&str> {
        self.0.get(reason).map(String::as_str)
    }

    pub fn color_of(&self, reason: &str) -> String {
        self.get(reason).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Plain text facts shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub client_name: String,
    pub shift_day: NaiveDate,
    pub endpoint_name: String,
    pub state_begin: String,
    pub state_end: String,
}

/// Everything the rendering surface needs, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub summary: Summary,
    pub state_labels: Vec<String>,
    pub color_map: ColorMap,
    pub reasons_pie: PieChart,
    pub states_duration_diagram: TimelineDiagram,
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    records: RecordSet,
    first: Record,
    colors: ColorMap,
}

impl ViewModel {
    pub fn new(records: RecordSet) -> AppResult<Self> {
        let Some(first) = records.first().cloned() else {
            return Err(AppError::EmptyView);
        };
        let colors = ColorMap::from_records(&records);
        debug!(
            records = records.len(),
            reasons = colors.len(),
            "view model built"
        );
        Ok(Self {
            records,
            first,
            colors,
        })
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.colors
    }

    fn first(&self) -> &Record {
        &self.first
    }

    /// First-seen client and endpoint follow the subset's order; day and
    /// bounds are min/max.
    pub fn summary(&self) -> Summary {
        let first = self.first();
        let shift_day = self
            .records
            .iter()
            .map(|r| r.shift_day)
            .min()
            .unwrap_or(first.shift_day);
        let begin = self
            .records
            .iter()
            .map(|r| r.state_begin)
            .min()
            .unwrap_or(first.state_begin);
        let end = self
            .records
            .iter()
            .map(|r| r.state_end)
            .max()
            .unwrap_or(first.state_end);

        Summary {
            client_name: first.client_name.clone(),
            shift_day,
            endpoint_name: first.endpoint_name.clone(),
            state_begin: format_period(&begin),
            state_end: format_period(&end),
        }
    }

    /// Distinct state labels offered for diagram emphasis.
    pub fn state_labels(&self) -> Vec<String> {
        self.records.distinct(|r| r.state.clone())
    }

    /// Hours per reason, slices in first-seen order.
    pub fn reasons_pie(&self) -> PieChart {
        let reasons = self.records.distinct(|r| r.reason.clone());
        let slices = reasons
            .into_iter()
            .map(|reason| {
                let value: f64 = self
                    .records
                    .iter()
                    .filter(|r| r.reason == reason)
                    .map(|r| r.duration_hour)
                    .sum();
                PieSlice {
                    hover: format!("{} : {} hours", reason, value),
                    color: self.colors.color_of(&reason),
                    label: reason,
                    value,
                }
            })
            .collect();

        PieChart { slices }
    }

    pub fn states_duration_diagram(&self) -> TimelineDiagram {
        let mut series: Vec<TimelineSeries> = Vec::new();

        for r in &self.records {
            let bar = self.bar_for(r);
            match series.iter_mut().find(|s| s.name == r.reason) {
                Some(s) => s.bars.push(bar),
                None => series.push(TimelineSeries {
                    name: r.reason.clone(),
                    color: self.colors.color_of(&r.reason),
                    opacity: FULL_OPACITY,
                    bars: vec![bar],
                }),
            }
        }

        let first = self.first();
        let min_begin = self
            .records
            .iter()
            .map(|r| r.state_begin)
            .min()
            .unwrap_or(first.state_begin);
        let max_end = self
            .records
            .iter()
            .map(|r| r.state_end)
            .max()
            .unwrap_or(first.state_end);

        let lo = min_begin - Duration::hours(1);
        let hi = max_end + Duration::hours(1);

        let mut ticks = Vec::new();
        let mut t = lo;
        while t <= hi {
            ticks.push(AxisTick {
                value: t,
                label: t.format(TICK_FMT).to_string(),
            });
            t += Duration::hours(1);
        }

        TimelineDiagram {
            title: DIAGRAM_TITLE.to_string(),
            groups: self.records.distinct(|r| r.endpoint_name.clone()),
            series,
            x_range: (lo, hi),
            ticks,
        }
    }

    fn bar_for(&self, r: &Record) -> TimelineBar {
        let formatted_start = format_period(&r.state_begin);
        let formatted_duration = format_duration_min(r.duration_min);
        let formatted_shift_day = format_short_day(&r.shift_day);

        let hover = [
            format!("State - {}", r.state),
            format!("Reason - {}", r.reason),
            format!("Start - {}", formatted_start),
            format!("Duration - {}", formatted_duration),
            String::new(),
            format!("Shift day - {}", formatted_shift_day),
            format!("Shift - {}", r.shift_name),
            format!("Operator - {}", r.operator),
        ]
        .join("\n");

        TimelineBar {
            start: r.state_begin,
            end: r.state_end,
            group: r.endpoint_name.clone(),
            color: self.colors.color_of(&r.reason),
            state: r.state.clone(),
            reason: r.reason.clone(),
            formatted_start,
            formatted_duration,
            formatted_shift_day,
            shift_name: r.shift_name.clone(),
            operator: r.operator.clone(),
            hover,
        }
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView {
            summary: self.summary(),
            state_labels: self.state_labels(),
            color_map: self.colors.clone(),
            reasons_pie: self.reasons_pie(),
            states_duration_diagram: self.states_duration_diagram(),
        }
    }
}
