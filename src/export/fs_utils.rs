use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Decide whether `path` may be (over)written.
///
/// - missing file, or `force` → Ok
/// - existing file on an interactive terminal → ask
/// - existing file otherwise → refuse, there is nobody to ask
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        return Err(AppError::from(io::Error::other(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        ))));
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        ))),
    }
}
