use crate::config::OutputConfig;
use crate::pipeline::ResultRecord;
use crate::FinderError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized results ready to be offered as files
#[derive(Debug, Clone)]
pub struct ExportedResults {
    /// Deduplicated records, verified first
    pub records: Vec<ResultRecord>,

    /// CSV of every record
    pub all_csv: Vec<u8>,

    /// CSV of verified records only; `None` when there are none
    pub verified_csv: Option<Vec<u8>>,
}

impl ExportedResults {
    /// Number of verified records
    pub fn verified_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_verified()).count()
    }
}

/// Paths written by [`write_exports`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub all_results: PathBuf,
    pub verified: Option<PathBuf>,
}

/// Removes records equal in every field, keeping the first occurrence
pub fn dedup_records(records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}

/// Stable sort putting verified records ahead of unverified ones
pub fn sort_verified_first(records: &mut [ResultRecord]) {
    records.sort_by_key(|r| r.verification_status.rank());
}

/// Serializes records to CSV bytes with a header row
pub fn records_to_csv(records: &[ResultRecord]) -> Result<Vec<u8>, FinderError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.into_inner().map_err(|e| FinderError::Io(e.into_error()))
}

/// Deduplicates, orders and serializes run results
pub fn export_results(records: Vec<ResultRecord>) -> Result<ExportedResults, FinderError> {
    let before = records.len();
    let mut records = dedup_records(records);
    if records.len() < before {
        tracing::debug!("Dropped {} duplicate records", before - records.len());
    }

    sort_verified_first(&mut records);

    let all_csv = records_to_csv(&records)?;

    let verified: Vec<ResultRecord> = records.iter().filter(|r| r.is_verified()).cloned().collect();
    let verified_csv = if verified.is_empty() {
        None
    } else {
        Some(records_to_csv(&verified)?)
    };

    Ok(ExportedResults {
        records,
        all_csv,
        verified_csv,
    })
}

/// Writes the exported CSV files into `directory`
///
/// The verified-only file is skipped when there are no verified records.
pub fn write_exports(
    exported: &ExportedResults,
    directory: &Path,
    output: &OutputConfig,
) -> Result<WrittenFiles, FinderError> {
    fs::create_dir_all(directory)?;

    let all_results = directory.join(&output.all_results_file);
    fs::write(&all_results, &exported.all_csv)?;
    tracing::info!(
        "Wrote {} records to {}",
        exported.records.len(),
        all_results.display()
    );

    let verified = match &exported.verified_csv {
        Some(bytes) => {
            let path = directory.join(&output.verified_file);
            fs::write(&path, bytes)?;
            tracing::info!(
                "Wrote {} verified records to {}",
                exported.verified_count(),
                path.display()
            );
            Some(path)
        }
        None => None,
    };

    Ok(WrittenFiles {
        all_results,
        verified,
    })
}
