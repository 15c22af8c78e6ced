use serde::Deserialize;

/// One person as returned by the search API
///
/// Every field is optional on the wire; absent and `null` both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Email suggested by the search provider
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub email_status: Option<String>,

    /// Most recent employment first
    #[serde(default)]
    pub employment_history: Option<Vec<EmploymentEntry>>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub organization: Option<Organization>,

    /// Not part of the documented schema; read when the provider includes it
    #[serde(default)]
    pub comp_web_url: Option<String>,
}

impl PersonRecord {
    /// Most recent employment entry, if any
    pub fn current_employment(&self) -> Option<&EmploymentEntry> {
        self.employment_history.as_ref().and_then(|h| h.first())
    }

    /// Website of the person's organization, falling back to `comp_web_url`
    ///
    /// Empty strings count as absent.
    pub fn website(&self) -> Option<&str> {
        self.organization
            .as_ref()
            .and_then(|o| o.website_url.as_deref())
            .filter(|w| !w.trim().is_empty())
            .or_else(|| self.comp_web_url.as_deref().filter(|w| !w.trim().is_empty()))
    }
}

/// Employment history entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmploymentEntry {
    #[serde(default)]
    pub organization_name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// Organization attached to a person
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,
}

/// Pagination metadata of a search response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagination {
    pub total_entries: u64,
}

/// Raw search response body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub people: Option<Vec<PersonRecord>>,

    pub pagination: Pagination,
}

/// One page of search results
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub people: Vec<PersonRecord>,

    /// `ceil(total_entries / page_divisor)`
    pub total_pages: u64,
}

impl SearchPage {
    /// Builds a page from a decoded response
    pub fn from_response(response: SearchResponse, page_divisor: u64) -> Self {
        Self {
            people: response.people.unwrap_or_default(),
            total_pages: response.pagination.total_entries.div_ceil(page_divisor.max(1)),
        }
    }
}
