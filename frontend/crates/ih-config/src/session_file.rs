//! Durable session file.
//!
//! Holds the bearer token between runs under the fixed key `token`.
//! Written after login/signup, removed on logout or when the server rejects
//! the token.
//!
//! File location: `<config_dir>/<session.file>` (default `session.json`)
//!
//! On Unix the file is created with mode 0600.

use crate::{ConfigError, ConfigErrorResult};

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Contents of the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    /// Bearer token issued by the API
    pub token: String,
    /// ISO 8601 timestamp when the token was stored
    pub saved_at: String,
}

impl SessionFile {
    /// Ensure the parent directory of a path exists.
    fn ensure_parent_dir(path: &Path) -> ConfigErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Persist a token, replacing any previous session.
    pub fn write(path: &Path, token: &str) -> ConfigErrorResult<SessionFile> {
        Self::ensure_parent_dir(path)?;

        let session = SessionFile {
            token: token.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        let content = serde_json::to_string_pretty(&session)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {e}")))?;

        let mut options = std::fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(session)
    }

    /// Read the session file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be read or parsed.
    pub fn read(path: &Path) -> ConfigErrorResult<Option<SessionFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let session: SessionFile = serde_json::from_str(&content).map_err(|e| {
            ConfigError::session(format!("Invalid session file {}: {e}", path.display()))
        })?;

        Ok(Some(session))
    }

    /// Remove the session file. Removing an absent file succeeds.
    pub fn remove(path: &Path) -> ConfigErrorResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}
