use crate::db::pool::DbPool;
use crate::db::queries::validate_table_name;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Read-only facts about the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    pub file_size: u64,
    pub rows: i64,
    pub clients: i64,
    pub endpoints: i64,
    pub first_shift_day: Option<String>,
    pub last_shift_day: Option<String>,
}

pub fn source_info(pool: &DbPool, db_path: &str, table: &str) -> AppResult<SourceInfo> {
    validate_table_name(table)?;

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (rows, clients, endpoints): (i64, i64, i64) = pool.conn.query_row(
        &format!(
            "SELECT COUNT(*), COUNT(DISTINCT client_name), COUNT(DISTINCT endpoint_name) FROM {table}"
        ),
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let (first_shift_day, last_shift_day): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            &format!("SELECT MIN(shift_day), MAX(shift_day) FROM {table}"),
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    Ok(SourceInfo {
        file_size,
        rows,
        clients,
        endpoints,
        first_shift_day,
        last_shift_day,
    })
}

/// `PRAGMA integrity_check` result; `"ok"` when the file is sound.
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(result)
}

pub fn print_source_info(info: &SourceInfo, db_path: &str, table: &str) {
    println!();

    let file_mb = (info.file_size as f64) / (1024.0 * 1024.0);
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!("{}• Table:{} {}", CYAN, RESET, table);
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, info.rows, RESET
    );
    println!("{}• Clients:{} {}", CYAN, RESET, info.clients);
    println!("{}• Endpoints:{} {}", CYAN, RESET, info.endpoints);

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Shift days:{}", CYAN, RESET);
    println!(
        "    from: {}",
        info.first_shift_day.as_deref().unwrap_or(&dash)
    );
    println!(
        "    to:   {}",
        info.last_shift_day.as_deref().unwrap_or(&dash)
    );

    println!();
}
