use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        //
        // 1) PRINT
        //
        if *print_config {
            if !path.exists() {
                warning(format!(
                    "No config file at {} (defaults are in use).",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{content}");
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            if !path.exists() {
                warning("Config file missing. Run `rroster init` to create it.");
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let parsed: Config = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("Invalid config file: {e}")))?;

            if parsed.database.trim().is_empty() {
                return Err(AppError::Config("'database' field is empty".to_string()));
            }
            if parsed.report_header.trim().is_empty() {
                return Err(AppError::Config(
                    "'report_header' field is empty".to_string(),
                ));
            }

            success("Configuration file is valid.");
        }

        if !*print_config && !*check {
            println!("Current database: {}", cfg.database);
            println!("Report header:    {}", cfg.report_header);
        }
    }

    Ok(())
}
