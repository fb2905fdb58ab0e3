//! CLI parse tests.

use super::commands::run_check;
use super::{Cli, CliCommand};
use clap::Parser;
use dsurl_core::{config, UrlValidator};
use std::fs;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_validate() {
    match parse(&["dsurl", "validate", "postgres", "db.example.com:5432"]).command {
        CliCommand::Validate {
            type_name,
            url,
            json,
        } => {
            assert_eq!(type_name, "postgres");
            assert_eq!(url, "db.example.com:5432");
            assert!(!json);
        }
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_validate_json_backslash() {
    match parse(&["dsurl", "validate", "--json", "mssql", r"myhost\SQLEXPRESS"]).command {
        CliCommand::Validate {
            type_name,
            url,
            json,
        } => {
            assert_eq!(type_name, "mssql");
            assert_eq!(url, r"myhost\SQLEXPRESS");
            assert!(json);
        }
        _ => panic!("expected Validate with --json"),
    }
}

#[test]
fn cli_parse_check_with_config() {
    let cli = parse(&["dsurl", "check", "--config", "/tmp/dsurl.toml"]);
    assert!(matches!(cli.command, CliCommand::Check));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/dsurl.toml"))
    );
}

#[test]
fn cli_parse_dialects() {
    let cli = parse(&["dsurl", "dialects"]);
    assert!(matches!(cli.command, CliCommand::Dialects));
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_validate_requires_url() {
    assert!(Cli::try_parse_from(["dsurl", "validate", "postgres"]).is_err());
}

#[test]
fn check_reads_config_given_on_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dsurl.toml");
    fs::write(
        &path,
        r#"
[[data_sources]]
name = "metrics"
type = "prometheus"
url = "prom.internal:9090"

[[data_sources]]
name = "warehouse"
type = "MSSQL"
url = 'wh01\DW:1433'
"#,
    )
    .unwrap();

    let cli = parse(&["dsurl", "check", "--config", path.to_str().unwrap()]);
    assert!(matches!(cli.command, CliCommand::Check));
    let cfg = config::load_from(cli.config.as_deref().unwrap()).unwrap();
    assert_eq!(cfg.data_sources.len(), 2);
    assert!(run_check(&UrlValidator::default(), &cfg).is_ok());

    fs::write(
        &path,
        "[[data_sources]]\nname = \"bad\"\ntype = \"mssql\"\nurl = 'a\\b\\c'\n",
    )
    .unwrap();
    let cfg = config::load_from(&path).unwrap();
    let err = run_check(&UrlValidator::default(), &cfg).unwrap_err();
    assert_eq!(err.to_string(), "1 of 1 data sources failed validation");
}
