use super::load_records;
use super::view::{parse_states, resolve_bound};
use crate::config::Config;
use crate::core::filter::{FilterEvent, Stage, StageOutput};
use crate::core::session::DashboardSession;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, problem, prompt};
use crate::ui::render;

enum Input {
    Quit,
    Reset,
    Line(String),
}

fn read(label: &str) -> AppResult<Input> {
    Ok(match prompt(label)? {
        None => Input::Quit,
        Some(l) if l.eq_ignore_ascii_case("q") => Input::Quit,
        Some(l) if l.eq_ignore_ascii_case("r") => Input::Reset,
        Some(l) => Input::Line(l),
    })
}

/// The label itself, else a 1-based index. Names may be numbers too.
fn pick<'a>(labels: &'a [String], input: &str) -> Option<&'a String> {
    labels.iter().find(|l| l.as_str() == input).or_else(|| {
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| labels.get(i))
    })
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let records = load_records(cfg)?;
    info(format!("{} records loaded from {}", records.len(), cfg.database));

    let mut session = DashboardSession::new(records).with_dimmed_opacity(cfg.dimmed_opacity);
    header("Settings");
    run(&mut session)
}

/// Drives the session until the user quits or input ends.
pub fn run(session: &mut DashboardSession) -> AppResult<()> {
    loop {
        let step = if session.view().is_some() {
            dashboard_step(session)
        } else {
            settings_step(session)
        };

        match step {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(e) if e.is_recoverable() => problem(e),
            Err(e) => return Err(e),
        }
    }
}

/// One prompt of the settings form. `Ok(false)` ends the session.
fn settings_step(session: &mut DashboardSession) -> AppResult<bool> {
    let stage = session.machine().stage();

    let Some(stage) = stage else {
        let input = read("Confirm selection? [Y/n] (r = reset, q = quit):")?;
        match input {
            Input::Quit => return Ok(false),
            Input::Reset => reset(session)?,
            Input::Line(l) if l.eq_ignore_ascii_case("n") => reset(session)?,
            Input::Line(_) => {
                session.handle(FilterEvent::Confirm)?;
                if let (Some(view), Some(diagram)) = (session.view(), session.diagram()) {
                    header("Dashboard");
                    print!("{}", render::dashboard(view, diagram));
                }
            }
        }
        return Ok(true);
    };

    let options = session.machine().current_options()?;
    let labels: Vec<String> = match &options {
        StageOutput::Clients(c) => c.clone(),
        StageOutput::Endpoints(e) => e.clone(),
        StageOutput::ShiftDays(d) => render::day_labels(d),
        _ => Vec::new(),
    };

    if matches!(stage, Stage::PeriodBegin | Stage::PeriodEnd) {
        let StageOutput::Period(period) = &options else {
            return Err(AppError::NoMatchingRecords);
        };
        let offered = if stage == Stage::PeriodBegin {
            &period.begin
        } else {
            &period.end
        };
        let label = format!("{} [{}] (r = reset, q = quit):", stage.label(), offered.label);
        match read(&label)? {
            Input::Quit => return Ok(false),
            Input::Reset => reset(session)?,
            Input::Line(l) => {
                let ts = if l.is_empty() {
                    offered.value
                } else {
                    resolve_bound(Some(l.as_str()), session.machine().selection().shift_day)?
                        .ok_or_else(|| AppError::InvalidTimestamp(l.clone()))?
                };
                let event = if stage == Stage::PeriodBegin {
                    FilterEvent::SelectBegin(ts)
                } else {
                    FilterEvent::SelectEnd(ts)
                };
                session.handle(event)?;
            }
        }
        return Ok(true);
    }

    print!("{}", render::stage_output(&options));
    let label = format!("{} 1-{} (r = reset, q = quit):", stage.label(), labels.len());
    match read(&label)? {
        Input::Quit => Ok(false),
        Input::Reset => {
            reset(session)?;
            Ok(true)
        }
        Input::Line(l) => {
            let choice = pick(&labels, &l).cloned().ok_or(AppError::InvalidChoice {
                stage: stage.label(),
                value: l,
            })?;
            let event = match &options {
                StageOutput::ShiftDays(days) => {
                    let day = days
                        .iter()
                        .find(|d| d.label == choice)
                        .map(|d| d.value)
                        .ok_or_else(|| AppError::InvalidDate(choice.clone()))?;
                    FilterEvent::SelectShiftDay(day)
                }
                StageOutput::Endpoints(_) => FilterEvent::SelectEndpoint(choice),
                _ => FilterEvent::SelectClient(choice),
            };
            session.handle(event)?;
            Ok(true)
        }
    }
}

/// One prompt on the dashboard: re-emphasise the timeline or leave.
fn dashboard_step(session: &mut DashboardSession) -> AppResult<bool> {
    let input = read(
        "Legend names to emphasise, comma separated (empty = all, s = settings, q = quit):",
    )?;
    match input {
        Input::Quit => Ok(false),
        Input::Reset => {
            reset(session)?;
            Ok(true)
        }
        Input::Line(l) if l.eq_ignore_ascii_case("s") => {
            reset(session)?;
            Ok(true)
        }
        Input::Line(l) => {
            let selected = parse_states(&l.split(',').map(str::to_string).collect::<Vec<_>>());
            let diagram = session.emphasize(&selected)?;
            print!("{}", render::timeline(diagram));
            print!("{}", render::legend(diagram));
            Ok(true)
        }
    }
}

fn reset(session: &mut DashboardSession) -> AppResult<()> {
    session.back_to_settings()?;
    header("Settings");
    Ok(())
}
