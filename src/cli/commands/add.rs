use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_collaborator;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a new collaborator.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let collaborator = insert_collaborator(&pool.conn, name)?;

        ttlog(
            &pool.conn,
            "add",
            &collaborator.name,
            &format!("Registered collaborator id {}", collaborator.id),
        )?;

        success(format!(
            "Collaborator '{}' registered (id {}).",
            collaborator.name, collaborator.id
        ));
    }

    Ok(())
}
