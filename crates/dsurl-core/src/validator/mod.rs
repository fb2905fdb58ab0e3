//! Data source URL validation.
//!
//! The dispatcher picks a strategy from the data source type name: types with a
//! registered [`Dialect`] are validated by it, everything else goes through the
//! generic strategy (default `http://` scheme, then the `url` parser).

mod dialect;
mod generic;
mod mssql;

use crate::error::UrlValidationError;
use crate::url_model::DataSourceUrl;
use std::sync::LazyLock;
use tracing::Dispatch;

pub use dialect::{Dialect, DialectRegistry};
pub use generic::{has_scheme_prefix, normalize, validate_generic, DEFAULT_SCHEME};
pub use mssql::MssqlDialect;

/// Validates data source URLs against a registry of dialects.
///
/// Traces go to the injected dispatcher when one is set, otherwise to the
/// current default subscriber. Safe to share between threads.
#[derive(Debug, Default)]
pub struct UrlValidator {
    registry: DialectRegistry,
    dispatch: Option<Dispatch>,
}

impl UrlValidator {
    pub fn new(registry: DialectRegistry) -> Self {
        Self {
            registry,
            dispatch: None,
        }
    }

    /// Validator that sends its traces to `dispatch` instead of the default subscriber.
    pub fn with_dispatch(registry: DialectRegistry, dispatch: Dispatch) -> Self {
        Self {
            registry,
            dispatch: Some(dispatch),
        }
    }

    pub fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    /// Validates `url` for a data source of type `type_name` (matched ignoring case).
    ///
    /// On success the returned URL always has a non-empty scheme.
    pub fn validate(
        &self,
        type_name: &str,
        url: &str,
    ) -> Result<DataSourceUrl, UrlValidationError> {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || self.dispatch_url(type_name, url))
            }
            None => self.dispatch_url(type_name, url),
        }
    }

    fn dispatch_url(
        &self,
        type_name: &str,
        url: &str,
    ) -> Result<DataSourceUrl, UrlValidationError> {
        // Strategy traces (e.g. scheme normalization) inherit `type_name` from this span.
        let span = tracing::debug_span!("validate_url", type_name, url);
        let _entered = span.enter();

        if let Some(dialect) = self.registry.get(type_name) {
            tracing::debug!(
                type_name,
                url,
                dialect = dialect.name(),
                "applying dialect URL parsing for this data source type"
            );
            return dialect.validate(url);
        }

        tracing::debug!(
            type_name,
            url,
            "applying default URL parsing for this data source type"
        );
        validate_generic(url)
    }
}

static DEFAULT_VALIDATOR: LazyLock<UrlValidator> = LazyLock::new(UrlValidator::default);

/// Validates `url` with the built-in dialects, logging to the current default subscriber.
///
/// # Examples
///
/// - `validate_url("postgres", "db.example.com:5432")` → `http://db.example.com:5432/`
/// - `validate_url("mssql", r"myhost\SQLEXPRESS")` → `sqlserver://myhost\SQLEXPRESS`
pub fn validate_url(type_name: &str, url: &str) -> Result<DataSourceUrl, UrlValidationError> {
    DEFAULT_VALIDATOR.validate(type_name, url)
}
