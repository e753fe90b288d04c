mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const SUPPORTED_PROVIDERS: &[&str] = &["huggingface"];

pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using built-in defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(config, |key| env::var(key).ok())?;
    validate(&config)?;

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Layers `QA_STARTUP_MODE` and `HF_TOKEN` on top of the file configuration.
/// The token only fills in when the file leaves it unset.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup("QA_STARTUP_MODE") {
        config.server.mode = mode.parse().map_err(Error::config)?;
        debug!("Startup mode overridden from environment: {}", config.server.mode);
    }

    if config.model.api_token.is_none() {
        config.model.api_token = lookup("HF_TOKEN").filter(|token| !token.is_empty());
    }

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if !SUPPORTED_PROVIDERS.contains(&config.model.provider.as_str()) {
        return Err(Error::config(format!(
            "Unsupported model provider: '{}'. Supported providers: {}",
            config.model.provider,
            SUPPORTED_PROVIDERS.join(", ")
        )));
    }

    if config.model.model.trim().is_empty() {
        return Err(Error::config("Model name must not be empty"));
    }

    if config.model.base_url.trim().is_empty() {
        return Err(Error::config("Model base_url must not be empty"));
    }

    Ok(())
}
