//! Connection-string dialects and the registry the dispatcher looks them up in.

use crate::error::UrlValidationError;
use crate::url_model::DataSourceUrl;
use std::collections::BTreeMap;
use std::fmt;

use super::mssql::MssqlDialect;

/// A data source type whose URLs follow their own connection-string syntax.
///
/// A dialect owns the full decision for its type: inputs it doesn't recognize
/// are errors, never passed on to the generic strategy.
pub trait Dialect: Send + Sync {
    /// Lower-case data source type name this dialect handles (e.g. `mssql`).
    fn key(&self) -> &str;

    /// Human-readable name used in error messages (e.g. `MSSQL`).
    fn name(&self) -> &str;

    /// Scheme assigned to every URL this dialect accepts.
    fn scheme(&self) -> &str;

    fn validate(&self, url: &str) -> Result<DataSourceUrl, UrlValidationError>;
}

/// Dialects keyed by lower-case data source type name.
pub struct DialectRegistry {
    dialects: BTreeMap<String, Box<dyn Dialect>>,
}

impl DialectRegistry {
    /// Registry with no dialects; every type goes through the generic strategy.
    pub fn empty() -> Self {
        Self {
            dialects: BTreeMap::new(),
        }
    }

    /// Adds `dialect` under its lower-cased key, returning the dialect it replaced.
    pub fn register<D>(&mut self, dialect: D) -> Option<Box<dyn Dialect>>
    where
        D: Dialect + 'static,
    {
        let key = dialect.key().to_lowercase();
        self.dialects.insert(key, Box::new(dialect))
    }

    /// Looks up the dialect for a data source type, ignoring case.
    pub fn get(&self, type_name: &str) -> Option<&dyn Dialect> {
        self.dialects
            .get(&type_name.to_lowercase())
            .map(|d| d.as_ref())
    }

    /// Registered dialects in key order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Dialect> {
        self.dialects.values().map(|d| d.as_ref())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.dialects.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

impl Default for DialectRegistry {
    /// Registry with the built-in dialects (currently MSSQL).
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(MssqlDialect);
        registry
    }
}

impl fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.dialects.keys()).finish()
    }
}
