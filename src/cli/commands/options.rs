use super::load_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{FilterEvent, FilterMachine};
use crate::errors::AppResult;
use crate::ui::render;
use crate::utils::time::require_date;

/// Replays the given prefix through the filter machine and prints the
/// choices of the stage that follows it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Options {
        client,
        endpoint,
        shift_day,
    } = cmd
    {
        let mut machine = FilterMachine::new(load_records(cfg)?);

        let mut events = Vec::new();
        if let Some(c) = client {
            events.push(FilterEvent::SelectClient(c.clone()));
        }
        if let Some(e) = endpoint {
            events.push(FilterEvent::SelectEndpoint(e.clone()));
        }
        if let Some(d) = shift_day {
            events.push(FilterEvent::SelectShiftDay(require_date(d)?));
        }

        let mut output = machine.current_options()?;
        for ev in events {
            output = machine.apply(ev)?;
        }

        print!("{}", render::stage_output(&output));
    }
    Ok(())
}
