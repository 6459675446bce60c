//! Moedict client settings, embedded as `default_moedict.toml`.

use serde::Deserialize;

use crate::MoedictError;

pub const DEFAULT_MOEDICT_TOML: &str = include_str!("default_moedict.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct MoedictConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl MoedictConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, MoedictError> {
        let config: MoedictConfig =
            toml::from_str(toml_str).map_err(|e| MoedictError::Config(e.to_string()))?;
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(MoedictError::Config(format!(
                "base_url must be an http(s) URL: {}",
                config.base_url
            )));
        }
        if config.timeout_secs == 0 {
            return Err(MoedictError::Config(
                "timeout_secs must be positive".to_string(),
            ));
        }
        Ok(config)
    }
}

impl Default for MoedictConfig {
    fn default() -> Self {
        MoedictConfig::from_toml(DEFAULT_MOEDICT_TOML).expect("moedict TOML must be valid")
    }
}
