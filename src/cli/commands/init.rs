use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes the default configuration. The
/// records database is never created here: it is provided by the data
/// pipeline and only ever opened read-only.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let (path, written) = Config::init(cli.db.as_deref(), *force)?;

        if written {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already present: {} (use --force to overwrite)",
                path.display()
            ));
        }

        let cfg = Config::load()?;
        info(format!("Database: {}", cfg.database));
    }
    Ok(())
}
