/// Line boundaries recognised between titles
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits a raw title list into individual titles
///
/// Input containing a comma is split on commas, otherwise on line breaks
/// (`\n`, `\r`, `\r\n` and the Unicode line separators).
/// Items are trimmed and empty items dropped; order follows the input.
///
/// # Examples
///
/// ```
/// use contact_finder::input::parse_titles;
///
/// assert_eq!(parse_titles("CEO, CTO"), vec!["CEO", "CTO"]);
/// assert_eq!(parse_titles("CEO\nCTO\n"), vec!["CEO", "CTO"]);
/// assert!(parse_titles("   ").is_empty());
/// ```
pub fn parse_titles(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let items: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else {
        raw.split(LINE_BREAKS).collect()
    };

    items
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
