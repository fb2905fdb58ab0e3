//! `dsurl check` – validate every data source in the config file.

use anyhow::{bail, Result};
use dsurl_core::config::{DataSourceEntry, DsurlConfig};
use dsurl_core::UrlValidator;

/// Validates each entry and renders one status line per data source.
///
/// Returns the lines and the number of entries that failed.
pub(crate) fn check_lines(
    validator: &UrlValidator,
    entries: &[DataSourceEntry],
) -> (Vec<String>, usize) {
    let mut failed = 0;
    let lines: Vec<String> = entries
        .iter()
        .map(|ds| match validator.validate(&ds.type_name, &ds.url) {
            Ok(url) => format!("ok     {}  [{}]  {}", ds.name, ds.type_name, url),
            Err(e) => {
                failed += 1;
                tracing::debug!(name = %ds.name, error = %e, "data source failed validation");
                format!("error  {}  [{}]  {}", ds.name, ds.type_name, e)
            }
        })
        .collect();
    (lines, failed)
}

pub fn run_check(validator: &UrlValidator, cfg: &DsurlConfig) -> Result<()> {
    if cfg.data_sources.is_empty() {
        println!("No data sources configured.");
        return Ok(());
    }

    let (lines, failed) = check_lines(validator, &cfg.data_sources);
    for line in &lines {
        println!("{line}");
    }

    if failed > 0 {
        bail!(
            "{} of {} data sources failed validation",
            failed,
            cfg.data_sources.len()
        );
    }
    Ok(())
}
