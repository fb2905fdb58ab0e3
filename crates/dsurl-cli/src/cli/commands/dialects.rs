//! `dsurl dialects` – list registered connection-string dialects.

use dsurl_core::DialectRegistry;

pub fn run_dialects(registry: &DialectRegistry) {
    for dialect in registry.iter() {
        println!("{:<12} {}://", dialect.key(), dialect.scheme());
    }
}
