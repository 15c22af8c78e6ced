//! HTTP client for the people-search API
//!
//! One POST per company batch. Only the requested page is fetched; the
//! computed page count is reported but never followed.

use crate::config::SearchConfig;
use crate::search::types::{SearchPage, SearchResponse};
use crate::SearchError;
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Source of people for a batch of companies
#[async_trait]
pub trait PeopleSearch: Send + Sync {
    /// Searches one page of people at the given companies with the given titles
    ///
    /// # Arguments
    ///
    /// * `companies_text` - Newline-joined company domains
    /// * `titles` - Job titles to filter on
    /// * `page` - 1-based page number
    async fn search(
        &self,
        companies_text: &str,
        titles: &[String],
        page: u32,
    ) -> Result<SearchPage, SearchError>;
}

/// Builds the shared HTTP client
///
/// No overall request timeout is set here; calls that need one set it per request.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// JSON body of a search request
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    q_organization_domains: &'a str,
    page: u32,
    per_page: u32,
    person_titles: &'a [String],
}

/// People-search API client
pub struct ApolloClient {
    client: Client,
    endpoint: String,
    api_key: String,
    per_page: u32,
    page_divisor: u64,
}

impl ApolloClient {
    /// Creates a client for the configured endpoint
    pub fn new(client: Client, config: &SearchConfig, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: api_key.into(),
            per_page: config.per_page,
            page_divisor: config.page_divisor,
        }
    }
}

#[async_trait]
impl PeopleSearch for ApolloClient {
    async fn search(
        &self,
        companies_text: &str,
        titles: &[String],
        page: u32,
    ) -> Result<SearchPage, SearchError> {
        let body = SearchRequest {
            api_key: &self.api_key,
            q_organization_domains: companies_text,
            page,
            per_page: self.per_page,
            person_titles: titles,
        };

        tracing::debug!(
            "Searching page {} for {} companies, {} titles",
            page,
            companies_text.lines().count(),
            titles.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Http {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| SearchError::Http {
            url: self.endpoint.clone(),
            source: e,
        })?;

        let decoded: SearchResponse =
            serde_json::from_str(&text).map_err(|e| SearchError::Malformed(e.to_string()))?;

        let page = SearchPage::from_response(decoded, self.page_divisor);
        tracing::debug!(
            "Search returned {} people ({} pages reported)",
            page.people.len(),
            page.total_pages
        );

        Ok(page)
    }
}
