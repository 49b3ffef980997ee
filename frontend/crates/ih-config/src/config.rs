use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for IH_CONFIG_DIR env var, else use ~/.issuehub/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply IH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: IH_CONFIG_DIR env var > ~/.issuehub/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Get absolute path to the session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.file))
    }

    /// Log configuration summary (never logs the token).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!("  api: {}", self.api.base_url);
        debug!("  session: {}", self.session.file);
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("IH_API_URL", &mut self.api.base_url);

        // Session
        Self::apply_env_string("IH_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("IH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("IH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
