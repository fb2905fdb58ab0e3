//! Error type for data source URL validation.

/// Reason a data source URL was rejected.
///
/// Both variants keep the string exactly as the caller supplied it, before any
/// scheme normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    /// The generic path could not parse the URL, even after defaulting the scheme.
    #[error("Validation of data source URL {url:?} failed: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The input does not match the connection-string shape of a dialect.
    #[error("unrecognized {dialect} URL format: {url:?}")]
    UnrecognizedFormat { dialect: String, url: String },
}

impl UrlValidationError {
    /// The offending URL string, as passed to the validator.
    pub fn url(&self) -> &str {
        match self {
            UrlValidationError::Parse { url, .. } => url,
            UrlValidationError::UnrecognizedFormat { url, .. } => url,
        }
    }
}
