use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `collaborators` table exists.
fn collaborators_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='collaborators'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `collaborators` table has a `dismissed_at` column.
fn collaborators_has_dismissed_at(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('collaborators')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "dismissed_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `collaborators` table with the modern schema.
fn create_collaborators_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS collaborators (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE,
            away         INTEGER NOT NULL DEFAULT 0,
            dismissed_at TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_collaborators_away ON collaborators(away, dismissed_at);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-dispensa `collaborators` table to include `dismissed_at`.
/// Recorded in the `log` table so it runs exactly once.
fn migrate_add_dismissed_at_column(conn: &Connection) -> Result<()> {
    let version = "20240918_0001_add_dismissed_at";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    conn.execute("ALTER TABLE collaborators ADD COLUMN dismissed_at TEXT;", [])?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added dismissed_at to collaborators')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'dismissed_at' to collaborators table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure collaborators table exists
    if !collaborators_table_exists(conn)? {
        create_collaborators_table(conn)?;
        success("Created collaborators table (modern schema).");
        return Ok(());
    }

    // 3) Upgrade older schemas
    if !collaborators_has_dismissed_at(conn)? {
        migrate_add_dismissed_at_column(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_collaborators_away ON collaborators(away, dismissed_at);
        "#,
    )?;

    Ok(())
}
