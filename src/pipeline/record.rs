use crate::search::PersonRecord;
use serde::Serialize;
use std::fmt;

/// Whether a working address was confirmed for a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    NotVerified,
}

impl VerificationStatus {
    /// Returns the column value for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::NotVerified => "not_verified",
        }
    }

    /// Sort key placing verified rows first
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Verified => 0,
            Self::NotVerified => 1,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exported row; field order is the CSV column order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResultRecord {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin: Option<String>,
    pub title: Option<String>,
    pub email_status: Option<String>,
    pub apollo_email: Option<String>,
    pub verified_email: Option<String>,
    pub verification_status: VerificationStatus,
    pub country: Option<String>,
    pub company: String,
    pub company_title: String,
    pub comp_web_url: String,
}

impl ResultRecord {
    /// Flattens a person into a row
    ///
    /// The status is derived from `verified_email`, so a row is `verified`
    /// exactly when it carries an address.
    pub fn new(person: &PersonRecord, domain: Option<&str>, verified_email: Option<String>) -> Self {
        let employment = person.current_employment();

        let verification_status = if verified_email.is_some() {
            VerificationStatus::Verified
        } else {
            VerificationStatus::NotVerified
        };

        Self {
            id: person.id.clone(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            linkedin: person.linkedin_url.clone(),
            title: person.title.clone(),
            email_status: person.email_status.clone(),
            apollo_email: person.email.clone(),
            verified_email,
            verification_status,
            country: person.country.clone(),
            company: employment
                .and_then(|e| e.organization_name.clone())
                .unwrap_or_default(),
            company_title: employment.and_then(|e| e.title.clone()).unwrap_or_default(),
            comp_web_url: domain.unwrap_or_default().to_string(),
        }
    }

    /// Returns true if a verified address was found
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}
