//! Contact assembler - main run orchestration
//!
//! For each company batch, in order:
//! 1. Search people at the batch's companies (page 1 only)
//! 2. For each person, derive the company domain
//! 3. Verify candidate emails one at a time, stopping at the first accepted one
//! 4. Append a [`ResultRecord`]
//!
//! A failed search skips its batch; a failed verification rejects its candidate.
//! Neither stops the run.

use crate::email::generate_email_candidates;
use crate::input::batch_companies;
use crate::pipeline::progress::ProgressReporter;
use crate::pipeline::record::ResultRecord;
use crate::search::{PeopleSearch, PersonRecord};
use crate::url::derive_domain;
use crate::verify::EmailVerifier;
use chrono::{DateTime, Utc};

/// Result of one assembler run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Records in the order people were returned, across batches in batch order
    pub records: Vec<ResultRecord>,

    /// Number of company batches attempted
    pub batches_total: usize,

    /// Start offsets of batches whose search failed
    pub failed_batches: Vec<usize>,

    /// Number of verification requests made
    pub verification_attempts: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Orchestrates search and verification over all company batches
pub struct ContactAssembler {
    search: Box<dyn PeopleSearch>,
    verifier: Box<dyn EmailVerifier>,
    batch_size: usize,
    max_titles: usize,
}

impl ContactAssembler {
    /// Creates an assembler
    ///
    /// # Arguments
    ///
    /// * `search` - People-search backend
    /// * `verifier` - Mailbox verification backend
    /// * `batch_size` - Companies per search request
    /// * `max_titles` - Titles forwarded per search request
    pub fn new(
        search: Box<dyn PeopleSearch>,
        verifier: Box<dyn EmailVerifier>,
        batch_size: usize,
        max_titles: usize,
    ) -> Self {
        Self {
            search,
            verifier,
            batch_size: batch_size.max(1),
            max_titles,
        }
    }

    /// Processes every company batch sequentially
    pub async fn run(
        &self,
        companies: &[String],
        titles: &[String],
        progress: &dyn ProgressReporter,
    ) -> RunOutcome {
        let started_at = Utc::now();
        let titles = &titles[..titles.len().min(self.max_titles)];
        let batches = batch_companies(companies, self.batch_size);
        let batches_total = batches.len();

        tracing::info!(
            "Starting run: {} companies in {} batches, {} titles",
            companies.len(),
            batches_total,
            titles.len()
        );

        let mut records = Vec::new();
        let mut failed_batches = Vec::new();
        let mut verification_attempts = 0;

        for (idx, batch) in batches.iter().enumerate() {
            let start = idx * self.batch_size;
            progress.message(&format!(
                "Processing companies {} to {}",
                start,
                start + self.batch_size
            ));

            let companies_text = batch.join("\n");

            match self.search.search(&companies_text, titles, 1).await {
                Ok(page) => {
                    tracing::info!(
                        "Batch {}/{}: {} people found",
                        idx + 1,
                        batches_total,
                        page.people.len()
                    );

                    for person in &page.people {
                        let (record, attempts) = self.assemble(person, progress).await;
                        verification_attempts += attempts;
                        records.push(record);
                    }
                }
                Err(e) => {
                    tracing::warn!("Search failed for batch starting at {}: {}", start, e);
                    progress.message(&format!("Error for chunk {}: {}", start, e));
                    failed_batches.push(start);
                }
            }

            progress.report((idx + 1) as f64 / batches_total as f64);
        }

        tracing::info!(
            "Run finished: {} records, {} failed batches, {} verification attempts",
            records.len(),
            failed_batches.len(),
            verification_attempts
        );

        RunOutcome {
            records,
            batches_total,
            failed_batches,
            verification_attempts,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Builds the record for one person, verifying when name and domain are known
    ///
    /// Returns the record and the number of verification requests made.
    async fn assemble(
        &self,
        person: &PersonRecord,
        progress: &dyn ProgressReporter,
    ) -> (ResultRecord, usize) {
        let domain = person.website().and_then(derive_domain);

        let first = non_empty(person.first_name.as_deref());
        let last = non_empty(person.last_name.as_deref());

        let (verified_email, attempts) = match (first, last, domain.as_deref()) {
            (Some(first), Some(last), Some(domain)) => {
                self.find_verified_email(first, last, domain, progress).await
            }
            _ => {
                tracing::debug!(
                    "Skipping verification for {:?}: missing name or domain",
                    person.id
                );
                (None, 0)
            }
        };

        (
            ResultRecord::new(person, domain.as_deref(), verified_email),
            attempts,
        )
    }

    /// Tries candidates in order; the first accepted one wins
    async fn find_verified_email(
        &self,
        first: &str,
        last: &str,
        domain: &str,
        progress: &dyn ProgressReporter,
    ) -> (Option<String>, usize) {
        progress.message(&format!(
            "Verifying emails for {} {} at {}",
            first, last, domain
        ));

        let mut attempts = 0;

        for email in generate_email_candidates(first, last, domain) {
            progress.message(&format!("Trying {}...", email));
            attempts += 1;

            match self.verifier.verify(&email).await {
                Ok(outcome) if outcome.accepted => {
                    progress.message(&format!("Found valid email: {}", email));
                    return (Some(email), attempts);
                }
                Ok(outcome) => {
                    tracing::debug!("Rejected {} ({})", email, outcome.result);
                }
                Err(e) => {
                    tracing::warn!("Error verifying {}: {}", email, e);
                    progress.message(&format!("Error verifying {}: {}", email, e));
                }
            }
        }

        (None, attempts)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
