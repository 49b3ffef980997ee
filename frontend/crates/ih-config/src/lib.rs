mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod session_file;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use session_file::SessionFile;

const CONFIG_DIR_ENV: &str = "IH_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".issuehub";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
