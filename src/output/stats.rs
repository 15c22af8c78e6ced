//! Run statistics
//!
//! Summarises a finished run for the terminal: how many people were found,
//! how many got a verified address, and which batches failed.

use crate::output::ExportedResults;
use crate::pipeline::RunOutcome;
use chrono::{DateTime, Utc};

/// Statistics for one completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// Unique people after deduplication
    pub total: usize,

    /// People with a verified address
    pub verified: usize,

    pub batches_total: usize,
    pub batches_failed: usize,
    pub verification_attempts: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunStatistics {
    /// Builds statistics from a run and its export
    pub fn new(outcome: &RunOutcome, exported: &ExportedResults) -> Self {
        Self {
            total: exported.records.len(),
            verified: exported.verified_count(),
            batches_total: outcome.batches_total,
            batches_failed: outcome.failed_batches.len(),
            verification_attempts: outcome.verification_attempts,
            started_at: outcome.started_at,
            finished_at: outcome.finished_at,
        }
    }

    /// Share of people with a verified address, in percent
    pub fn verified_percentage(&self) -> f64 {
        if self.total > 0 {
            (self.verified as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Headline line shown after a run
    pub fn headline(&self) -> String {
        format!(
            "Found {} people, verified emails for {} ({:.1}%)",
            self.total,
            self.verified,
            self.verified_percentage()
        )
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Run Statistics ===\n");

    println!("{}", stats.headline());
    println!();

    println!("Batches:");
    println!("  Total: {}", stats.batches_total);
    println!("  Failed: {}", stats.batches_failed);
    println!();

    println!("Verification requests: {}", stats.verification_attempts);
    println!(
        "Started: {}  Finished: {}  ({}s)",
        stats.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
        stats.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
        stats.duration_seconds()
    );
}
