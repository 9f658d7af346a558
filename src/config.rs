//! Configuration loading
//!
//! Reads `~/.config/zhname/config.toml` (or an explicit path). A missing file
//! yields defaults; a malformed file yields defaults plus a warning that the
//! UI shows as a notification.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    AiConfig, AiProviderType, ClipboardBackend, ClipboardConfig, Config, ExportConfig,
    SpeechConfig,
};

use crate::error::ZhnameError;

const CONFIG_DIR: &str = "zhname";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface, if any
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path_override` or the default location
pub fn load_config(path_override: Option<&Path>) -> ConfigResult {
    let path = match path_override {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return with_env_overrides(Config::default(), None),
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => with_env_overrides(config, None),
        Err(e) => {
            log::warn!("{}", e);
            with_env_overrides(Config::default(), Some(e.to_string()))
        }
    }
}

/// Parse a config file; a missing file is not an error
pub fn load_config_from_path(path: &Path) -> Result<Config, ZhnameError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents).map_err(|message| ZhnameError::Config {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

fn with_env_overrides(mut config: Config, warning: Option<String>) -> ConfigResult {
    apply_api_key_env(&mut config, |name| std::env::var(name).ok());
    ConfigResult { config, warning }
}

/// Fill in a missing or blank API key from the provider's environment variable
pub fn apply_api_key_env<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if config.ai.has_api_key() {
        return;
    }
    if let Some(key) = lookup(config.ai.provider.api_key_env()).filter(|k| !k.trim().is_empty()) {
        config.ai.api_key = Some(key);
    }
}
