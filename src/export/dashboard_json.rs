use crate::core::view::DashboardView;
use crate::errors::AppResult;
use std::io::Write;

/// Scrive il view model completo in JSON formattato.
pub fn write_dashboard_json<W: Write>(mut out: W, view: &DashboardView) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, view)?;
    writeln!(out)?;
    Ok(())
}
