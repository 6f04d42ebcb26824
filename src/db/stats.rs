use crate::db::pool::DbPool;
use crate::db::queries::count_collaborators;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROSTER COUNTS
    //
    let total = count_collaborators(&pool.conn)?;
    let away: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM collaborators WHERE away = 1",
        [],
        |row| row.get(0),
    )?;
    let dismissed: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM collaborators WHERE dismissed_at IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Collaborators:{} {}{}{} ({} away, {} with a dismissal date)",
        CYAN, RESET, GREEN, total, RESET, away, dismissed
    );

    //
    // 3) OLDEST RECORD
    //
    let first_created: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM collaborators ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_created.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• First registration:{} {}", CYAN, RESET, fmt_first);

    println!();
    Ok(())
}
