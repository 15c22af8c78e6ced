/// Removes a leading `http://` or `https://` (any case)
pub fn strip_scheme(raw: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = raw.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &raw[scheme.len()..];
            }
        }
    }
    raw
}

/// Derives a bare company domain from a website value
///
/// Strips the scheme, a leading `www.` and everything from the first `/`.
/// Case is preserved; callers lowercase where they need to.
///
/// # Returns
///
/// * `Some(String)` - The bare host
/// * `None` - Nothing left after stripping
///
/// # Examples
///
/// ```
/// use contact_finder::url::derive_domain;
///
/// assert_eq!(derive_domain("https://www.acme.com/careers"), Some("acme.com".to_string()));
/// assert_eq!(derive_domain("http://Example.com"), Some("Example.com".to_string()));
/// assert_eq!(derive_domain("https://"), None);
/// ```
pub fn derive_domain(raw: &str) -> Option<String> {
    let without_scheme = strip_scheme(raw.trim());

    let without_www = match without_scheme.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &without_scheme[4..],
        _ => without_scheme,
    };

    let host = without_www.split('/').next().unwrap_or("").trim();

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
