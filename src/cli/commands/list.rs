use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::order_for_display;
use crate::db::pool::DbPool;
use crate::db::queries::list_all;
use crate::errors::AppResult;
use crate::models::collaborator::Collaborator;
use crate::utils::colors::{colorize_away, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { active, away } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let mut records = order_for_display(list_all(&pool.conn)?);

        if *active {
            records.retain(|c| !c.away);
        } else if *away {
            records.retain(|c| c.away);
        }

        if records.is_empty() {
            println!("No collaborators registered yet.");
            return Ok(());
        }

        print_roster(&records);
    }
    Ok(())
}

fn print_roster(records: &[Collaborator]) {
    let mut table = Table::new(vec![
        Column {
            header: "#".to_string(),
            width: 4,
        },
        Column {
            header: "ID".to_string(),
            width: 5,
        },
        Column {
            header: "Name".to_string(),
            width: 24,
        },
        Column {
            header: "Status".to_string(),
            width: 16,
        },
        Column {
            header: "Dismissed".to_string(),
            width: 12,
        },
        Column {
            header: "Registered".to_string(),
            width: 25,
        },
    ]);

    for (idx, c) in records.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            c.id.to_string(),
            c.name.clone(),
            colorize_away(c.away),
            colorize_optional(&c.dismissed_str()),
            c.created_at.clone(),
        ]);
    }

    println!("{}", table.render());
}
