use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::client::GITHUB_API_URL;

/// Root configuration structure, deserialized from `.gh-org/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Where and how requests are sent.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// API root; organization URLs are built as `<base_url>/orgs/<name>`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    GITHUB_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Default repository filter.
#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// License key to keep. Kept as an untyped value: a non-string key is not
    /// rejected here, it just matches no repository.
    pub license: Option<Value>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<work_dir>/.gh-org/config.toml`
/// 3. `~/.config/gh-org/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(work_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = work_dir.join(".gh-org").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("gh-org").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
