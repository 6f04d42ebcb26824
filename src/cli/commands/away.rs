use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::set_away;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Set or clear the away flag for a collaborator.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Away { id, clear } = cmd {
        let value = !*clear;

        let pool = DbPool::new(&cfg.database)?;

        let collaborator = set_away(&pool.conn, *id, value)?;

        ttlog(
            &pool.conn,
            "away",
            &collaborator.name,
            &format!("Away flag set to {} for id {}", value, collaborator.id),
        )?;

        success(format!(
            "Collaborator '{}' is now {}.",
            collaborator.name,
            collaborator.away_str()
        ));
    }

    Ok(())
}
