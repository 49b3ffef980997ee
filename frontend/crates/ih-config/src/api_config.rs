use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use serde::Deserialize;

/// Remote API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every API path is appended to
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        if url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        Ok(())
    }
}
