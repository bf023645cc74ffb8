use crate::pipeline::{Record, TIME_WINDOWS};
use crate::tables::TableError;
use std::path::Path;

const LISTING_COLUMNS: [&str; 7] = [
    "url",
    "bedrooms",
    "bathrooms",
    "sqft",
    "rent",
    "ppsf",
    "address",
];

/// The output schema: fixed listing columns, then `walkscore` when that
/// stage is enabled, then one `{address}_{label}` column per reference
/// address and time window (whole morning block first).
pub fn column_order(commute_addresses: &[String], with_walkscore: bool) -> Vec<String> {
    let mut columns: Vec<String> = LISTING_COLUMNS.iter().map(|c| c.to_string()).collect();
    if with_walkscore {
        columns.push("walkscore".to_string());
    }
    for (label, _) in TIME_WINDOWS {
        for address in commute_addresses {
            columns.push(format!("{address}_{label}"));
        }
    }
    columns
}

/// One CSV row per record; fields a record never populated serialize as
/// empty strings.
pub fn write_records<P: AsRef<Path>>(
    path: P,
    columns: &[String],
    records: &[Record],
) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| record.get(column).map(String::as_str).unwrap_or("")),
        )?;
    }
    writer.flush().map_err(|e| TableError::Csv(e.to_string()))?;
    Ok(())
}
