//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Extract the hostname from a URL string.
pub fn get_hostname(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

/// Hostname of a URL, or the raw string when it cannot be parsed.
pub fn hostname_or_raw(url_str: &str) -> String {
    get_hostname(url_str).unwrap_or_else(|| url_str.to_string())
}

/// Join an API path onto a server base URL.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
