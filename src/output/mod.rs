//! Output module for exporting run results
//!
//! This module handles:
//! - Deduplicating and ordering result records
//! - Serializing all / verified-only records to CSV
//! - Writing the CSV files and printing run statistics

mod export;
pub mod stats;

pub use export::{
    dedup_records, export_results, records_to_csv, sort_verified_first, write_exports,
    ExportedResults, WrittenFiles,
};
pub use stats::{print_statistics, RunStatistics};
