use crate::core::diagram::clamp_opacity;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Overrides the configuration directory (tests, portable installs).
pub const HOME_ENV: &str = "SHIFTBOARD_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_table() -> String {
    "sources".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_dimmed_opacity() -> f64 {
    0.2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            table: default_table(),
            log_level: default_log_level(),
            dimmed_opacity: default_dimmed_opacity(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$SHIFTBOARD_HOME`, else `~/.shiftboard`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiftboard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftboard.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sources.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();

        // loaded before logging is up, so out-of-range values are fixed silently
        cfg.dimmed_opacity = clamp_opacity(cfg.dimmed_opacity);
        Ok(cfg)
    }

    /// Write the default configuration file, keeping an existing one unless `force`.
    /// Returns the config file path and whether it was written.
    pub fn init(database: Option<&str>, force: bool) -> AppResult<(PathBuf, bool)> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !force {
            return Ok((path, false));
        }

        let mut cfg = Config::default();
        if let Some(db) = database {
            cfg.database = db.to_string();
        }

        let yaml = serde_yaml::to_string(&cfg)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok((path, true))
    }
}
