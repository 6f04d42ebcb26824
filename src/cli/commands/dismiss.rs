use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::set_dismissed;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Record a dismissal date for a collaborator.
///
/// Overwrites any previous dismissal date; the away flag is left untouched
/// (the two states are independent).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dismiss { id, date: when } = cmd {
        let when = match when {
            Some(s) => date::parse_date_to_datetime(s)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::now_local(),
        };

        let pool = DbPool::new(&cfg.database)?;

        let collaborator = set_dismissed(&pool.conn, *id, when)?;

        ttlog(
            &pool.conn,
            "dismiss",
            &collaborator.name,
            &format!(
                "Dismissal date set to {} for id {}",
                when.format("%Y-%m-%d %H:%M:%S"),
                collaborator.id
            ),
        )?;

        success(format!(
            "Dismissal recorded for '{}' on {}.",
            collaborator.name,
            collaborator.dismissed_str()
        ));
    }

    Ok(())
}
