//! Default strategy: make sure a scheme is present, then hand off to the URL parser.

use crate::error::UrlValidationError;
use crate::url_model::DataSourceUrl;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;

/// Scheme prepended to URLs that don't specify one.
pub const DEFAULT_SCHEME: &str = "http";

// Also matches an empty scheme ("://host") so the parser can reject it.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]*://").unwrap());

/// True if `url` starts with something shaped like `scheme://`.
pub fn has_scheme_prefix(url: &str) -> bool {
    SCHEME_PREFIX.is_match(url)
}

/// Returns `url` unchanged if it has a scheme prefix, otherwise `http://` + `url`.
pub fn normalize(url: &str) -> Cow<'_, str> {
    if has_scheme_prefix(url) {
        return Cow::Borrowed(url);
    }
    tracing::debug!(
        url,
        "data source URL doesn't specify protocol, prepending {}:// to make it unambiguous",
        DEFAULT_SCHEME
    );
    Cow::Owned(format!("{}://{}", DEFAULT_SCHEME, url))
}

/// Validates a URL for data source types without a dedicated dialect.
///
/// The returned `host` is the input's host and port as written (case and
/// default ports kept). An empty input yields `http://` with an empty host.
/// Errors carry the URL as supplied, not the normalized form.
pub fn validate_generic(url: &str) -> Result<DataSourceUrl, UrlValidationError> {
    let normalized = normalize(url);
    if url.is_empty() {
        // `url` rejects "http://" (special schemes need a host).
        return Ok(DataSourceUrl::from_scheme_and_host(DEFAULT_SCHEME, ""));
    }
    Url::parse(&normalized)
        .map(|parsed| DataSourceUrl::from_parsed(parsed, &normalized))
        .map_err(|source| UrlValidationError::Parse {
            url: url.to_string(),
            source,
        })
}
