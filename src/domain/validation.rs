use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::errors::ValidationError;

/// Local part, `@`, then a domain containing at least one dot. No whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True when `candidate` parses as an absolute URL with a host.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

/// Trims `raw` and checks it is a usable URL. Returns the trimmed value.
pub fn validate_url(raw: &str) -> Result<&str, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    if !is_valid_url(url) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(url)
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
