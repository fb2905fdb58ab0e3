use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One configured data source, checked by `dsurl check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceEntry {
    /// Display name used in check output.
    pub name: String,
    /// Data source type (e.g. "postgres", "mssql"); selects the validation strategy.
    #[serde(rename = "type")]
    pub type_name: String,
    /// URL or connection string as entered by the user.
    pub url: String,
}

/// Global configuration loaded from `~/.config/dsurl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DsurlConfig {
    /// Default log filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Data sources to validate in batch.
    #[serde(default)]
    pub data_sources: Vec<DataSourceEntry>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DsurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DsurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<DsurlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: DsurlConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
