use crate::models::collaborator::Collaborator;
use csv::Writer;

/// Write the roster as CSV to the given file.
pub fn write_csv(path: &str, records: &[Collaborator]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "name", "away", "dismissed_at", "created_at"])?;

    for c in records {
        wtr.write_record(&[
            c.id.to_string(),
            c.name.clone(),
            c.away.to_string(),
            c.dismissed_at
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            c.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
