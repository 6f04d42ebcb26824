use crate::errors::{AppError, AppResult};
use crate::models::collaborator::Collaborator;
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

/// Storage format for `collaborators.dismissed_at`.
pub const DISMISSED_AT_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn map_row(row: &Row) -> Result<Collaborator> {
    let dismissed_raw: Option<String> = row.get("dismissed_at")?;

    let dismissed_at = match dismissed_raw {
        Some(s) => Some(
            NaiveDateTime::parse_from_str(&s, DISMISSED_AT_FMT).map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s.clone())),
                )
            })?,
        ),
        None => None,
    };

    Ok(Collaborator {
        id: row.get("id")?,
        name: row.get("name")?,
        away: row.get::<_, i64>("away")? == 1,
        dismissed_at,
        created_at: row.get("created_at")?,
    })
}

/// Register a new collaborator.
///
/// The name is trimmed before the emptiness check; the trimmed form is what
/// gets stored. A UNIQUE violation surfaces as `DuplicateName` and leaves the
/// existing record untouched.
pub fn insert_collaborator(conn: &Connection, name: &str) -> AppResult<Collaborator> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyName);
    }

    let created_at = Local::now().to_rfc3339();

    let inserted = conn.execute(
        "INSERT INTO collaborators (name, away, dismissed_at, created_at)
         VALUES (?1, 0, NULL, ?2)",
        params![name, created_at],
    );

    match inserted {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            return Err(AppError::DuplicateName(name.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let id = conn.last_insert_rowid();

    Ok(Collaborator {
        id,
        name: name.to_string(),
        away: false,
        dismissed_at: None,
        created_at,
    })
}

/// Return every collaborator, unordered (rowid order).
/// Display ordering is applied by `core::roster::order_for_display`.
pub fn list_all(conn: &Connection) -> AppResult<Vec<Collaborator>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, away, dismissed_at, created_at FROM collaborators",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Retrieve a single collaborator by id.
pub fn get_collaborator(conn: &Connection, id: i64) -> AppResult<Option<Collaborator>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, away, dismissed_at, created_at FROM collaborators WHERE id = ?1",
    )?;

    let found = stmt.query_row([id], map_row).optional()?;
    Ok(found)
}

/// Set or clear the away flag. Fails with `NotFound` for an unknown id.
pub fn set_away(conn: &Connection, id: i64, value: bool) -> AppResult<Collaborator> {
    let changed = conn.execute(
        "UPDATE collaborators SET away = ?1 WHERE id = ?2",
        params![if value { 1 } else { 0 }, id],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }

    get_collaborator(conn, id)?.ok_or(AppError::NotFound(id))
}

/// Record the dismissal timestamp, overwriting any previous value.
/// Fails with `NotFound` for an unknown id. There is no operation that
/// clears the value back to NULL.
pub fn set_dismissed(conn: &Connection, id: i64, when: NaiveDateTime) -> AppResult<Collaborator> {
    let changed = conn.execute(
        "UPDATE collaborators SET dismissed_at = ?1 WHERE id = ?2",
        params![when.format(DISMISSED_AT_FMT).to_string(), id],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }

    get_collaborator(conn, id)?.ok_or(AppError::NotFound(id))
}

pub fn load_log(conn: &Connection) -> Result<Vec<(String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

pub fn count_collaborators(conn: &Connection) -> Result<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM collaborators")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}
