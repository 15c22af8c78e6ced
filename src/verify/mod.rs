//! Mailbox verification module
//!
//! This module handles:
//! - The [`EmailVerifier`] trait the pipeline depends on
//! - [`MillionVerifierClient`], the HTTP implementation of that trait
//! - [`RateGate`], the fixed-interval spacing applied between attempts

mod client;
mod rate_limit;

pub use client::{EmailVerifier, MillionVerifierClient, VerificationOutcome};
pub use rate_limit::RateGate;
