use crate::errors::{AppError, AppResult};
use crate::models::collaborator::Collaborator;

/// Write the roster as pretty-printed JSON.
pub fn write_json(path: &str, records: &[Collaborator]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
