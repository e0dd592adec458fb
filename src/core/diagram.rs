//! Chart data sets handed to the rendering surface.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

/// Opacity of series outside the current emphasis selection.
pub const DIMMED_OPACITY: f64 = 0.2;
pub const FULL_OPACITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One state occurrence on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBar {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub group: String,
    pub color: String,
    pub state: String,
    pub reason: String,
    pub formatted_start: String,
    pub formatted_duration: String,
    pub formatted_shift_day: String,
    pub shift_name: String,
    pub operator: String,
    pub hover: String,
}

/// Bars sharing a reason, drawn with one color and one opacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSeries {
    pub name: String,
    pub color: String,
    pub opacity: f64,
    pub bars: Vec<TimelineBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: NaiveDateTime,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDiagram {
    pub title: String,
    /// Y categories (endpoint names), first-seen order.
    pub groups: Vec<String>,
    pub series: Vec<TimelineSeries>,
    pub x_range: (NaiveDateTime, NaiveDateTime),
    pub ticks: Vec<AxisTick>,
}

impl TimelineDiagram {
    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.bars.len()).sum()
    }

    /// Emphasise the series named in `selected`, dimming the others to
    /// `dimmed`, kept within `[0, 1]`. An empty selection restores every series.
    pub fn with_emphasis(mut self, selected: &HashSet<String>, dimmed: f64) -> Self {
        let dimmed = clamp_opacity(dimmed);
        for s in &mut self.series {
            s.opacity = if selected.is_empty() || selected.contains(&s.name) {
                FULL_OPACITY
            } else {
                dimmed
            };
        }
        self
    }
}

/// Out-of-range levels never make a dimmed series brighter than a full one.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_finite() {
        opacity.clamp(0.0, FULL_OPACITY)
    } else {
        DIMMED_OPACITY
    }
}

/// Visual-only emphasis toggle: only opacities change, never bars.
pub fn filter_by_state(diagram: TimelineDiagram, selected: &HashSet<String>) -> TimelineDiagram {
    diagram.with_emphasis(selected, DIMMED_OPACITY)
}
