use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, API_URL_ENV, CONFIG_FILE, HONEYBADGER_API_URL};
use crate::error::{ErrorContext, ProvisionError, ProvisionResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

fn config_path() -> ProvisionResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ProvisionError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> ProvisionResult<Config> {
    load_config_from(&config_path()?)
}

/// A missing file is an empty config; a malformed one is an error.
pub fn load_config_from(path: &Path) -> ProvisionResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&config_str)
        .map_err(|e| ProvisionError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> ProvisionResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> ProvisionResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}

/// Resolve the API key: explicit flag, then environment, then config file.
pub fn get_api_key(flag: Option<&str>) -> ProvisionResult<String> {
    if let Some(key) = flag.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    load_config()?.api_key.ok_or(ProvisionError::ApiKeyNotFound)
}

/// Resolve the API base URL, falling back to the hosted service.
pub fn get_api_url(flag: Option<&str>) -> ProvisionResult<String> {
    let url = match flag {
        Some(url) => url.to_string(),
        None => match env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => url,
            _ => load_config()?
                .api_url
                .unwrap_or_else(|| HONEYBADGER_API_URL.to_string()),
        },
    };

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ProvisionError::InvalidInput(format!("API URL must be http(s): {}", url)));
    }

    Ok(url.trim_end_matches('/').to_string())
}
