use crate::{InputError, InputResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Accepted company column names, in order of preference
pub const COMPANY_COLUMNS: [&str; 2] = ["company_web_url", "comp_web_url"];

/// Loads unique company domains from a CSV file
///
/// See [`read_companies`] for the column and filtering rules.
pub fn load_companies(path: &Path) -> InputResult<Vec<String>> {
    let file = File::open(path)?;
    read_companies(file)
}

/// Reads unique company domains from CSV content
///
/// The first header listed in [`COMPANY_COLUMNS`] that exists is used.
/// Blank cells are dropped and duplicates removed, keeping first-seen order.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Company values as they appear in the file (trimmed)
/// * `Err(InputError::MissingCompanyColumn)` - Neither column is present
pub fn read_companies<R: Read>(reader: R) -> InputResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let column_idx = COMPANY_COLUMNS
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
        .ok_or(InputError::MissingCompanyColumn)?;

    let mut seen = HashSet::new();
    let mut companies = Vec::new();

    for result in reader.records() {
        let record = result?;

        let value = match record.get(column_idx).map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        if seen.insert(value.to_string()) {
            companies.push(value.to_string());
        }
    }

    tracing::debug!(
        "Read {} unique companies from column '{}'",
        companies.len(),
        &headers[column_idx]
    );

    Ok(companies)
}

/// Splits companies into contiguous chunks of `size` (the last may be shorter)
///
/// # Examples
///
/// ```
/// use contact_finder::input::batch_companies;
///
/// let batches = batch_companies(&["a", "b", "c"], 2);
/// assert_eq!(batches, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn batch_companies<T: Clone>(companies: &[T], size: usize) -> Vec<Vec<T>> {
    companies
        .chunks(size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}
