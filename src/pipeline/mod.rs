//! Pipeline module: turning company batches into result records
//!
//! This module contains:
//! - [`ResultRecord`], the flat exported row for one person
//! - [`ProgressReporter`], the capability used to surface progress and messages
//! - [`ContactAssembler`], the batch → search → verify orchestration

mod assembler;
mod progress;
mod record;

pub use assembler::{ContactAssembler, RunOutcome};
pub use progress::{BarReporter, LogReporter, ProgressReporter};
pub use record::{ResultRecord, VerificationStatus};
