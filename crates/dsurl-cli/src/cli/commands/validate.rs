//! `dsurl validate <type> <url>` – validate a single URL.

use anyhow::Result;
use dsurl_core::UrlValidator;

pub fn run_validate(
    validator: &UrlValidator,
    type_name: &str,
    url: &str,
    json: bool,
) -> Result<()> {
    let parsed = validator.validate(type_name, url)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{}", parsed);
    }
    Ok(())
}
