//! Text rendering of stage choices and dashboard views.

use crate::core::diagram::{PieChart, TimelineDiagram};
use crate::core::filter::{PeriodOptions, SelectOption, StageOutput};
use crate::core::view::{Summary, ViewModel};
use crate::utils::colors::{RESET, ansi_for, ansi_for_opacity};
use crate::utils::formatting::{bold, format_hours, pad_left, pad_right};
use crate::utils::table::Table;
use crate::utils::time::{format_date, format_timestamp};
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

const TIMELINE_WIDTH: usize = 72;

/// Numbered list, 1-based, as used by the interactive session.
pub fn numbered<T: AsRef<str>>(items: &[T]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {:>2}) {}\n", i + 1, item.as_ref()));
    }
    out
}

pub fn day_labels(days: &[SelectOption<NaiveDate>]) -> Vec<String> {
    days.iter().map(|d| d.label.clone()).collect()
}

pub fn period(p: &PeriodOptions) -> String {
    format!(
        "  begin: {}  [{}]\n  end:   {}  [{}]\n",
        p.begin.label,
        format_timestamp(&p.begin.value),
        p.end.label,
        format_timestamp(&p.end.value),
    )
}

/// Choices for the next stage, headed by what they are.
pub fn stage_output(out: &StageOutput) -> String {
    match out {
        StageOutput::Clients(c) => format!("Clients:\n{}", numbered(c)),
        StageOutput::Endpoints(e) => format!("Endpoints:\n{}", numbered(e)),
        StageOutput::ShiftDays(d) => format!("Shift days:\n{}", numbered(&day_labels(d))),
        StageOutput::Period(p) => format!("Period:\n{}", period(p)),
        StageOutput::Awaiting(Some(stage)) => format!("Next: {}\n", stage.label()),
        StageOutput::Awaiting(None) => "Selection complete.\n".to_string(),
        StageOutput::Confirmed(set) => format!("{} records selected.\n", set.len()),
    }
}

pub fn summary(s: &Summary) -> String {
    let rows = [
        ("Client", s.client_name.clone()),
        ("Shift day", format_date(&s.shift_day)),
        ("Endpoint", s.endpoint_name.clone()),
        ("Period begin", s.state_begin.clone()),
        ("Period end", s.state_end.clone()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{} {}\n", pad_right(&format!("{label}:"), 14), bold(&value)));
    }
    out
}

pub fn pie(chart: &PieChart) -> String {
    let total = chart.total();
    let mut table = Table::new(&["Reason", "Hours", "Share", "Color"]);
    for s in &chart.slices {
        let share = if total > 0.0 {
            s.value / total * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            s.label.clone(),
            format_hours(s.value),
            format!("{share:.1}%"),
            s.color.clone(),
        ]);
    }
    let mut out = table.render();
    out.push_str(&format!("Total: {} hours\n", format_hours(total)));
    out
}

fn column_of(diagram: &TimelineDiagram, t: chrono::NaiveDateTime) -> usize {
    let (lo, hi) = diagram.x_range;
    let span = (hi - lo).num_seconds().max(1) as f64;
    let offset = (t - lo).num_seconds().max(0) as f64;
    ((offset / span) * (TIMELINE_WIDTH - 1) as f64).round() as usize
}

/// One row per endpoint and reason; bars are drawn in the series color,
/// dimmed series in grey.
pub fn timeline(diagram: &TimelineDiagram) -> String {
    let label_width = diagram
        .series
        .iter()
        .flat_map(|s| s.bars.iter().map(|b| b.group.width() + s.name.width() + 3))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", bold(&diagram.title));

    // hour ticks
    let mut axis = vec![' '; TIMELINE_WIDTH];
    let mut labels = vec![' '; TIMELINE_WIDTH + 2];
    for tick in &diagram.ticks {
        let col = column_of(diagram, tick.value);
        axis[col] = '|';
        for (i, ch) in tick.label.chars().enumerate() {
            if col + i < labels.len() {
                labels[col + i] = ch;
            }
        }
    }
    let pad = " ".repeat(label_width + 1);
    out.push_str(&format!("{pad}{}\n", labels.iter().collect::<String>().trim_end()));
    out.push_str(&format!("{pad}{}\n", axis.iter().collect::<String>()));

    for group in &diagram.groups {
        for s in &diagram.series {
            let bars: Vec<_> = s.bars.iter().filter(|b| &b.group == group).collect();
            if bars.is_empty() {
                continue;
            }
            let mut row = vec![' '; TIMELINE_WIDTH];
            for b in bars {
                let from = column_of(diagram, b.start);
                let to = column_of(diagram, b.end).max(from);
                for cell in row.iter_mut().take(to + 1).skip(from) {
                    *cell = '█';
                }
            }
            let label = format!("{} / {}", group, s.name);
            out.push_str(&format!(
                "{} {}{}{}\n",
                pad_right(&label, label_width),
                ansi_for_opacity(&s.color, s.opacity),
                row.iter().collect::<String>(),
                RESET
            ));
        }
    }
    out
}

/// Legend with opacity, so emphasis is visible even without colors.
pub fn legend(diagram: &TimelineDiagram) -> String {
    let mut out = String::new();
    for s in &diagram.series {
        out.push_str(&format!(
            "  {}■{} {} {}\n",
            ansi_for(&s.color),
            RESET,
            pad_right(&s.name, 24),
            pad_left(&format!("opacity {:.1}", s.opacity), 12)
        ));
    }
    out
}

/// Summary, pie table, timeline and legend in one block.
pub fn dashboard(view: &ViewModel, diagram: &TimelineDiagram) -> String {
    let mut out = String::new();
    out.push_str(&summary(&view.summary()));
    out.push_str(&format!("\n{}\n", bold("Reasons")));
    out.push_str(&pie(&view.reasons_pie()));
    out.push('\n');
    out.push_str(&timeline(diagram));
    out.push('\n');
    out.push_str(&legend(diagram));
    out.push_str(&format!("\nStates: {}\n", view.state_labels().join(", ")));
    out.push_str("Emphasis matches the legend names above.\n");
    out
}
