//! LinkedIn profile URL parsing.
//!
//! URL parsing only, no network: the add-contact flow derives the profile
//! username from a pasted URL so both can be stored together.

use once_cell::sync::Lazy;
use regex::Regex;

static PROFILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/([^/?]+)").expect("valid profile regex"));

/// Extracts the profile username from a LinkedIn profile URL.
///
/// Takes the path segment after `linkedin.com/in/`, cut at the next `/` or
/// query string. Returns `None` when the URL does not look like a profile
/// link.
pub fn extract_username(url: &str) -> Option<String> {
    PROFILE_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|username| username.as_str().to_string())
}
