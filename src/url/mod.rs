//! URL handling module for Contact-Finder
//!
//! Company websites arrive in many shapes (`https://www.acme.com/careers`,
//! `acme.com`, `http://Acme.com`). This module reduces them to the bare host
//! used both as the `comp_web_url` output column and as the email domain.

mod domain;

pub use domain::{derive_domain, strip_scheme};
