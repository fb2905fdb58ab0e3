//! SQL Server dialect: ODBC-style `host[\instance][:port]` connection strings.

use crate::error::UrlValidationError;
use crate::url_model::DataSourceUrl;
use regex::Regex;
use std::sync::LazyLock;

use super::dialect::Dialect;

/// Host (anything but a backslash), optional `\instance` (no backslash or
/// colon, at least one character), optional `:port`.
static ODBC_CONNECTION_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\\]+(?:\\[^\\:]+)?(?::[0-9]+)?$").unwrap());

/// Dialect for the `mssql` data source type.
///
/// Accepted strings become a `sqlserver` URL whose host is the whole input,
/// instance and port included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    pub const KEY: &'static str = "mssql";
    pub const SCHEME: &'static str = "sqlserver";
}

impl Dialect for MssqlDialect {
    fn key(&self) -> &str {
        Self::KEY
    }

    fn name(&self) -> &str {
        "MSSQL"
    }

    fn scheme(&self) -> &str {
        Self::SCHEME
    }

    fn validate(&self, url: &str) -> Result<DataSourceUrl, UrlValidationError> {
        tracing::debug!(url, "validating MSSQL URL");

        if !ODBC_CONNECTION_STRING.is_match(url) {
            tracing::debug!(url, "couldn't recognize as valid MSSQL URL");
            return Err(UrlValidationError::UnrecognizedFormat {
                dialect: self.name().to_string(),
                url: url.to_string(),
            });
        }

        tracing::debug!(url, "recognized as ODBC URL format");
        Ok(DataSourceUrl::from_scheme_and_host(Self::SCHEME, url))
    }
}
