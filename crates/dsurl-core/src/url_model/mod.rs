//! Structured form of a validated data source URL.
//!
//! Generic URLs are converted from [`url::Url`]; dialect connection strings are
//! built directly with only `scheme` and `host` set.

use serde::Serialize;
use std::fmt;
use url::{Position, Url};

/// A data source URL that passed validation.
///
/// `host` is the authority's host together with its port, exactly as the URL
/// serializes it (`db.example.com:5432`). Dialect connection strings keep the
/// whole input here (`myhost\SQLEXPRESS:1433`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceUrl {
    pub scheme: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl DataSourceUrl {
    /// URL carrying only a scheme and a host, as produced for dialect connection strings.
    pub fn from_scheme_and_host(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            username: String::new(),
            password: None,
            host: host.into(),
            path: String::new(),
            query: None,
            fragment: None,
        }
    }
}

impl DataSourceUrl {
    /// Converts `parsed`, taking `host` verbatim from `input`, the string it was parsed from.
    ///
    /// The parser lowercases domains and drops default ports; the authority
    /// span of `input` keeps both. Falls back to the parser's form if `input`
    /// has no `://` authority.
    pub fn from_parsed(parsed: Url, input: &str) -> Self {
        let host = authority_host(input).map(str::to_string);
        let mut url = Self::from(parsed);
        if let Some(host) = host {
            url.host = host;
        }
        url
    }
}

/// Host and port of the authority in `input`, without userinfo.
fn authority_host(input: &str) -> Option<&str> {
    let start = input.find("://")? + 3;
    let rest = &input[start..];
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = rest[..end].trim_end();
    Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
}

impl From<Url> for DataSourceUrl {
    fn from(parsed: Url) -> Self {
        Self {
            scheme: parsed.scheme().to_string(),
            username: parsed.username().to_string(),
            password: parsed.password().map(str::to_string),
            host: parsed[Position::BeforeHost..Position::AfterPort].to_string(),
            path: parsed.path().to_string(),
            query: parsed.query().map(str::to_string),
            fragment: parsed.fragment().map(str::to_string),
        }
    }
}

impl fmt::Display for DataSourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if !self.username.is_empty() || self.password.is_some() {
            write!(f, "{}", self.username)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            write!(f, "@")?;
        }
        write!(f, "{}{}", self.host, self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
