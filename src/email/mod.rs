//! Candidate email generation from names and a company domain.

mod patterns;

pub use patterns::{generate_email_candidates, PATTERN_COUNT};
