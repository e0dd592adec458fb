#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};
use shiftboard::models::Record;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sb(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("shiftboard");
    cmd.env("SHIFTBOARD_HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Per-test config directory, so no test reads a real user configuration.
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("timestamp literal")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date literal")
}

#[allow(clippy::too_many_arguments)]
pub fn rec(
    client: &str,
    endpoint: &str,
    shift_day: &str,
    begin: &str,
    end: &str,
    state: &str,
    reason: &str,
    color: &str,
) -> Record {
    Record::new(client, endpoint, day(shift_day), ts(begin), ts(end))
        .with_state(state, reason, color)
        .with_shift("Day shift", "Ivanov")
}

/// The two-record dataset: one client, one endpoint, one day.
pub fn scenario_records() -> Vec<Record> {
    vec![
        rec("A", "E1", "2024-01-01", "2024-01-01 08:00", "2024-01-01 09:00", "Running", "R1", "red"),
        rec("A", "E1", "2024-01-01", "2024-01-01 09:00", "2024-01-01 10:00", "Idle", "R2", "blue"),
    ]
}

/// Two clients, several endpoints and days, one overnight state.
pub fn sample_records() -> Vec<Record> {
    vec![
        rec("Alpha", "Press 1", "2024-01-01", "2024-01-01 08:00", "2024-01-01 09:00", "Running", "Work", "#00ff00"),
        rec("Alpha", "Press 1", "2024-01-01", "2024-01-01 09:00", "2024-01-01 09:30", "Idle", "Break", "#ffcc00"),
        rec("Alpha", "Press 1", "2024-01-01", "2024-01-01 09:30", "2024-01-01 11:00", "Running", "Work", "#00ff00"),
        rec("Alpha", "Press 1", "2024-01-02", "2024-01-02 08:00", "2024-01-02 10:00", "Running", "Work", "#00ff00"),
        rec("Alpha", "Press 2", "2024-01-01", "2024-01-01 22:00", "2024-01-02 02:00", "Stopped", "Repair", "red"),
        rec("Beta", "Lathe", "2024-01-01", "2024-01-01 07:00", "2024-01-01 08:00", "Idle", "No operator", "grey"),
    ]
}

const SCHEMA: &str = "
    CREATE TABLE sources (
        endpoint_id INTEGER,
        client_name VARCHAR,
        endpoint_name VARCHAR,
        shift_day DATE,
        calendar_day DATE,
        state VARCHAR,
        status VARCHAR,
        reason VARCHAR,
        state_begin DATETIME,
        state_end DATETIME,
        duration_hour FLOAT,
        duration_min FLOAT,
        color VARCHAR,
        period_name VARCHAR,
        shift_name VARCHAR,
        operator VARCHAR,
        operator_auth_start DATETIME,
        operator_auth_end DATETIME,
        shift_begin TIME,
        shift_end TIME
    );";

const DT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Create the `sources` table and store `records` in order, using the text
/// forms an ORM writes to SQLite.
pub fn write_db(db_path: &str, records: &[Record]) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(SCHEMA).expect("create schema");
    for (i, r) in records.iter().enumerate() {
        conn.execute(
            "INSERT INTO sources VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                                         ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
            params![
                (i % 3) as i64 + 1,
                r.client_name,
                r.endpoint_name,
                r.shift_day.format("%Y-%m-%d").to_string(),
                r.calendar_day.format("%Y-%m-%d").to_string(),
                r.state,
                r.status,
                r.reason,
                r.state_begin.format(DT).to_string(),
                r.state_end.format(DT).to_string(),
                r.duration_hour,
                r.duration_min,
                r.color,
                r.period_name,
                r.shift_name,
                r.operator,
                r.operator_auth_start.map(|t| t.format(DT).to_string()),
                r.operator_auth_end.map(|t| t.format(DT).to_string()),
                "08:00:00.000000",
                "20:00:00.000000",
            ],
        )
        .expect("insert record");
    }
}

/// Fresh DB file filled with `sample_records()`.
pub fn sample_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    write_db(&db_path, &sample_records());
    db_path
}
