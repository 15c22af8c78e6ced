//! People-search module
//!
//! This module contains:
//! - Wire types for the people-search API response
//! - The [`PeopleSearch`] trait the pipeline depends on
//! - [`ApolloClient`], the HTTP implementation of that trait

mod client;
mod types;

pub use client::{build_http_client, ApolloClient, PeopleSearch};
pub use types::{EmploymentEntry, Organization, Pagination, PersonRecord, SearchPage, SearchResponse};
