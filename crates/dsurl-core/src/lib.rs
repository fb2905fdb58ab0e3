pub mod config;
pub mod error;
pub mod logging;
pub mod url_model;
pub mod validator;

pub use error::UrlValidationError;
pub use url_model::DataSourceUrl;
pub use validator::{validate_url, Dialect, DialectRegistry, MssqlDialect, UrlValidator};
