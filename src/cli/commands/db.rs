use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        let pool = DbPool::open_read_only(&cfg.database)?;

        if *info {
            let facts = stats::source_info(&pool, &cfg.database, &cfg.table)?;
            stats::print_source_info(&facts, &cfg.database, &cfg.table);
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);
            let integrity = stats::integrity_check(&pool)?;
            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
