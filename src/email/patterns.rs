//! Generates candidate email addresses from a person's name and company domain.

use std::collections::HashSet;

/// Number of local-part templates tried for every person
pub const PATTERN_COUNT: usize = 10;

/// Builds the local parts in the order they are verified
fn local_parts(first: &str, last: &str) -> [String; PATTERN_COUNT] {
    let f0 = first.chars().next().map(String::from).unwrap_or_default();
    let l0 = last.chars().next().map(String::from).unwrap_or_default();

    [
        format!("{}.{}", first, last), // jane.doe
        format!("{}{}", first, last),  // janedoe
        format!("{}{}", f0, last),     // jdoe
        first.to_string(),             // jane
        format!("{}{}", first, l0),    // janed
        format!("{}.{}", f0, last),    // j.doe
        format!("{}_{}", first, last), // jane_doe
        format!("{}_{}", f0, last),    // j_doe
        format!("{}{}", first, l0),    // janed (repeated template)
        format!("{}{}", f0, l0),       // jd
    ]
}

/// Generates candidate addresses for a name at a domain
///
/// All parts are lowercased. Returns an empty vector when any part is empty.
/// Candidates keep template order with duplicates removed, so the caller can
/// verify them front to back and stop at the first accepted one.
///
/// # Examples
///
/// ```
/// use contact_finder::email::generate_email_candidates;
///
/// let emails = generate_email_candidates("Ann", "Lee", "acme.com");
/// assert_eq!(emails[0], "ann.lee@acme.com");
/// assert!(generate_email_candidates("Ann", "", "acme.com").is_empty());
/// ```
pub fn generate_email_candidates(first_name: &str, last_name: &str, domain: &str) -> Vec<String> {
    let first = first_name.trim().to_lowercase();
    let last = last_name.trim().to_lowercase();
    let domain = domain.trim().to_lowercase();

    if first.is_empty() || last.is_empty() || domain.is_empty() {
        tracing::trace!(
            "Cannot generate candidates: missing part in '{} {}' @ '{}'",
            first_name,
            last_name,
            domain
        );
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let candidates: Vec<String> = local_parts(&first, &last)
        .into_iter()
        .map(|local| format!("{}@{}", local, domain))
        .filter(|email| seen.insert(email.clone()))
        .collect();

    tracing::debug!(
        "Generated {} candidates for '{} {}' @ '{}'",
        candidates.len(),
        first_name,
        last_name,
        domain
    );

    candidates
}
