use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Where the session token is persisted, relative to the config directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_SESSION_FILENAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::session("session.file must not be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
