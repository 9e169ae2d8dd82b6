//! Small text helpers shared by config parsing and error reporting.

/// Longest message kept from a server or transport error.
pub const MAX_MESSAGE_CHARS: usize = 180;

/// Trims `value`, treating blank input like a missing value.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Whether `url` uses the `http` or `https` scheme (case-insensitive).
pub fn has_http_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, rest)| {
        !rest.is_empty()
            && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
    })
}

/// Trims an error message and cuts it to [`MAX_MESSAGE_CHARS`] characters.
pub fn truncate_message(value: &str) -> String {
    value.trim().chars().take(MAX_MESSAGE_CHARS).collect()
}
