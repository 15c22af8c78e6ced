//! Input module: everything read before the first API call
//!
//! This module handles:
//! - Splitting the free-text job title list
//! - Loading company domains from a CSV file
//! - Chunking company domains into per-request batches

mod companies;
mod titles;

pub use companies::{batch_companies, load_companies, read_companies, COMPANY_COLUMNS};
pub use titles::parse_titles;
