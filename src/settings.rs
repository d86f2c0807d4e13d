use std::path::PathBuf;

use directories::ProjectDirs;

use crate::{api::directions::DEFAULT_DIRECTIONS_URL, error::ConfigError};

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const API_URL_VAR: &str = "DRIVE_TIME_API_URL";
pub const CONFIG_DIR_VAR: &str = "DRIVE_TIME_CONFIG_DIR";

const DEFAULTS_FILE: &str = "defaults.json";

/// Everything the tool reads from its environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: String,
    pub api_url: String,
    config_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let api_url = non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_DIRECTIONS_URL.to_string());
        let config_dir = non_empty(CONFIG_DIR_VAR).map(PathBuf::from);

        Ok(Self {
            api_key,
            api_url,
            config_dir,
        })
    }

    /// Where saved defaults live: `$DRIVE_TIME_CONFIG_DIR/defaults.json`, or the
    /// platform config dir (`~/.config/drive_time` on Linux).
    pub fn defaults_path(&self) -> Result<PathBuf, ConfigError> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", "drive_time")
                .ok_or(ConfigError::NoConfigDir)?
                .config_dir()
                .to_path_buf(),
        };

        Ok(dir.join(DEFAULTS_FILE))
    }
}
