// src/util/text.rs

/// Split a comma-separated setting into trimmed entries.
///
/// Blank entries are kept as empty strings; callers decide whether an empty
/// setting means "no list at all".
///
/// # Examples
///
/// ```
/// use cubox_share::util::text::split_comma_list;
///
/// assert_eq!(split_comma_list("a, b ,c"), vec!["a", "b", "c"]);
/// assert_eq!(split_comma_list("a,,b"), vec!["a", "", "b"]);
/// ```
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .map(str::to_string)
        .collect()
}

/// Replace the last path segment of a URL with `***`
///
/// The save endpoint carries the API key as its last segment.
pub fn redact_last_segment(url: &str) -> String {
    match url.rfind('/') {
        Some(idx) => format!("{}/***", &url[..idx]),
        None => "***".to_string(),
    }
}
