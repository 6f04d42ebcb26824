use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::order_for_display;
use crate::db::pool::DbPool;
use crate::db::queries::list_all;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, notify_export_success, write_csv, write_json};
use std::path::Path;

/// Export the roster to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);
        ensure_writable(path, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        let records = order_for_display(list_all(&pool.conn)?);

        match format {
            ExportFormat::Csv => write_csv(file, &records)?,
            ExportFormat::Json => write_json(file, &records)?,
        }

        notify_export_success(format.as_str(), path);
    }

    Ok(())
}
