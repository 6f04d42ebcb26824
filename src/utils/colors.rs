/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Away flag rendering: away in red, active in green.
pub fn colorize_away(away: bool) -> String {
    if away {
        format!("{RED}away{RESET}")
    } else {
        format!("{GREEN}active{RESET}")
    }
}

/// Returns GREY for the "--" placeholder of an unset optional field.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
