use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            // Try the requested editor first, then the platform default.
            let mut candidates = vec![editor_to_use];
            if candidates[0] != default_editor {
                candidates.push(default_editor);
            }

            let mut edited = false;
            for ed in &candidates {
                match Command::new(ed).arg(&path).status() {
                    Ok(s) if s.success() => {
                        success(format!("Configuration file edited using '{ed}'"));
                        edited = true;
                        break;
                    }
                    _ => warning(format!("Editor '{ed}' not available")),
                }
            }

            if !edited {
                error("Failed to edit the configuration file");
            }
        }
    }

    Ok(())
}
