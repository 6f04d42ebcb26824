use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::{format_dismissal_report, order_for_display};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::list_all;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use std::fs;

/// Print the dismissal report, optionally copying it to the clipboard or
/// writing it to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        date: report_date,
        copy,
        file,
    } = cmd
    {
        let today = match report_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;

        let ordered = order_for_display(list_all(&pool.conn)?);
        let text = format_dismissal_report(
            &ordered,
            today,
            &cfg.report_header,
            &cfg.report_date_format,
        );

        print!("{text}");

        if let Some(path) = file {
            fs::write(path, &text)?;
            success(format!("Report written to {path}"));
        }

        if *copy {
            copy_to_clipboard(&text);
        }

        ttlog(&pool.conn, "report", "", "Dismissal report generated")?;
    }

    Ok(())
}

/// Clipboard delivery failures (e.g. headless sessions) downgrade to a
/// warning; the report text has already been printed.
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => success("Report copied to clipboard."),
            Err(e) => warning(format!("Could not copy to clipboard: {e}")),
        },
        Err(e) => warning(format!("Clipboard unavailable: {e}")),
    }
}
