use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub struct LogLogic;

impl LogLogic {
    /// Print the internal log table, newest entries first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        for (date, operation, message) in rows {
            println!("- {} | {} | {}", date, operation, message);
        }

        Ok(())
    }
}
