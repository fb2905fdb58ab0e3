//! CLI command handlers, one per file.

mod check;
mod dialects;
mod validate;

pub use check::run_check;
pub use dialects::run_dialects;
pub use validate::run_validate;
