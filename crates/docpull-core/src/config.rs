use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// User-Agent sent with every document request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.131 Safari/537.36";

/// Settings for `docpull collect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Navigation page whose links are collected.
    pub page_url: String,
    /// `id` of the element containing the navigation anchors.
    pub container_id: String,
    /// Seconds to wait for the container element before giving up.
    pub wait_timeout_secs: u64,
    /// URL list written by the collector (truncated on every run).
    pub output_file: PathBuf,
    /// Run Chrome without a window.
    pub headless: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            page_url: "https://support.controlup.com/docs".to_string(),
            container_id: "categories".to_string(),
            wait_timeout_secs: 10,
            output_file: PathBuf::from("controlup-docs.txt"),
            headless: true,
        }
    }
}

impl CollectorConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

/// Settings for `docpull fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Line-delimited URL list to read.
    pub urls_file: PathBuf,
    /// Directory the fetched documents are written to.
    pub output_dir: PathBuf,
    pub user_agent: String,
    /// Pause after every request, in seconds (e.g. 0.5 = 500ms).
    pub delay_secs: f64,
    pub connect_timeout_secs: u64,
    /// Upper bound on a whole request including the body transfer.
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            urls_file: Path::new("urls").join("controlup-docs.txt"),
            output_dir: PathBuf::from("data"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_secs: 1.0,
            connect_timeout_secs: 30,
            timeout_secs: 300,
        }
    }
}

impl FetcherConfig {
    /// Delay between requests; negative or non-finite values mean no delay.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO)
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            user_agent: self.user_agent.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpOptions::default()
        }
    }
}

/// Global configuration loaded from `~/.config/docpull/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocpullConfig {
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docpull")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<DocpullConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DocpullConfig> {
    if !path.exists() {
        let default_cfg = DocpullConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DocpullConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
