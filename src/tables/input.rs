use crate::tables::TableError;
use std::path::Path;

/// Reads the `url` column out of the input table, preserving row order.
/// Other columns are ignored; a missing `url` column is fatal.
pub fn read_url_column<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TableError> {
    let mut reader = csv::Reader::from_path(path)?;
    let url_index = reader
        .headers()?
        .iter()
        .position(|header| header == "url")
        .ok_or(TableError::MissingUrlColumn)?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(url_index) {
            let url = url.trim();
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }
    Ok(urls)
}
