use super::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{FilterSelection, confirm};
use crate::core::view::ViewModel;
use crate::errors::{AppError, AppResult};
use crate::export::{
    OutputFormat, ensure_writable, notify_export_success, write_dashboard_json, write_records_csv,
};
use crate::ui::messages::warning;
use crate::ui::render;
use crate::utils::time::{parse_datetime, parse_time, require_date};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

/// A full timestamp, or a time of day placed on the shift day.
pub(crate) fn resolve_bound(
    raw: Option<&str>,
    shift_day: Option<NaiveDate>,
) -> AppResult<Option<NaiveDateTime>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Some(ts) = parse_datetime(raw) {
        return Ok(Some(ts));
    }
    match (parse_time(raw), shift_day) {
        (Some(t), Some(day)) => Ok(Some(day.and_time(t))),
        _ => Err(AppError::InvalidTimestamp(raw.to_string())),
    }
}

pub(crate) fn parse_states(states: &[String]) -> HashSet<String> {
    states
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        client,
        endpoint,
        shift_day,
        begin,
        end,
        states,
        format,
        file,
        force,
    } = cmd
    {
        let shift_day = shift_day.as_deref().map(require_date).transpose()?;
        let selection = FilterSelection {
            client_name: client.clone(),
            endpoint_name: endpoint.clone(),
            shift_day,
            state_begin: resolve_bound(begin.as_deref(), shift_day)?,
            state_end: resolve_bound(end.as_deref(), shift_day)?,
        };

        // Reject an incomplete form before touching the database.
        let missing = selection.missing();
        if !missing.is_empty() {
            return Err(AppError::IncompleteSelection(
                missing.iter().map(|s| s.label()).collect(),
            ));
        }

        let records = load_records(cfg)?;
        let view = ViewModel::new(confirm(&records, &selection)?)?;
        let diagram = view
            .states_duration_diagram()
            .with_emphasis(&parse_states(states), cfg.dimmed_opacity);

        match format {
            OutputFormat::Text => {
                if file.is_some() {
                    warning("--file is ignored for text output");
                }
                print!("{}", render::dashboard(&view, &diagram));
            }
            OutputFormat::Json => {
                let mut dashboard = view.dashboard();
                dashboard.states_duration_diagram = diagram;
                match file {
                    Some(f) => {
                        let path = Path::new(f);
                        ensure_writable(path, *force)?;
                        write_dashboard_json(File::create(path)?, &dashboard)?;
                        notify_export_success("JSON", path);
                    }
                    None => write_dashboard_json(io::stdout().lock(), &dashboard)?,
                }
            }
            OutputFormat::Csv => match file {
                Some(f) => {
                    let path = Path::new(f);
                    ensure_writable(path, *force)?;
                    write_records_csv(File::create(path)?, view.records())?;
                    notify_export_success("CSV", path);
                }
                None => write_records_csv(io::stdout().lock(), view.records())?,
            },
        }
    }
    Ok(())
}
