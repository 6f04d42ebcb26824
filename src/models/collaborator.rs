use chrono::NaiveDateTime;
use serde::Serialize;

/// A single roster record.
///
/// `away` and `dismissed_at` are independent: a collaborator can carry a
/// dismissal date while still active, and can be away without one.
#[derive(Debug, Clone, Serialize)]
pub struct Collaborator {
    pub id: i64,                             // ⇔ collaborators.id
    pub name: String,                        // ⇔ collaborators.name (TEXT UNIQUE)
    pub away: bool,                          // ⇔ collaborators.away (INTEGER 0/1)
    pub dismissed_at: Option<NaiveDateTime>, // ⇔ collaborators.dismissed_at (TEXT, nullable)
    pub created_at: String,                  // ⇔ collaborators.created_at (TEXT, ISO8601)
}

impl Collaborator {
    pub fn away_str(&self) -> &'static str {
        if self.away { "away" } else { "active" }
    }

    /// Dismissal date as shown in the roster table ("--" when unset).
    pub fn dismissed_str(&self) -> String {
        match self.dismissed_at {
            Some(dt) => dt.format("%d/%m/%Y").to_string(),
            None => "--".to_string(),
        }
    }
}
