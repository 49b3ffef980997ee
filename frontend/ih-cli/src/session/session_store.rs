//! Session token storage.
//!
//! The token is the one piece of process-wide mutable state. It is read by
//! every outgoing request and written only by the auth session (login,
//! signup, logout, startup restore).

use crate::CliClientResult;

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use ih_config::SessionFile;
use log::warn;

/// Source of the bearer token attached to API requests
pub trait SessionStore: Send + Sync {
    /// Current token, if a session exists
    fn token(&self) -> Option<String>;

    /// Persist a token, replacing any previous one
    fn store_token(&self, token: &str) -> CliClientResult<()>;

    /// Forget the token. Clearing an absent session succeeds.
    fn clear(&self) -> CliClientResult<()>;
}

/// Token persisted in the session file, cached in memory.
///
/// Hydrated once by `open()`, written through on every change.
pub struct FileSessionStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl FileSessionStore {
    /// Open the store, loading any saved token.
    ///
    /// A session file that cannot be read or parsed counts as no session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let token = match SessionFile::read(&path) {
            Ok(session) => session.map(|s| s.token),
            Err(e) => {
                warn!("Ignoring unreadable session file: {e}");
                None
            }
        };

        Self {
            path,
            token: RwLock::new(token),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_token(&self, token: &str) -> CliClientResult<()> {
        SessionFile::write(&self.path, token)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CliClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        SessionFile::remove(&self.path)?;
        Ok(())
    }
}

/// Token held only in memory, for embedding and tests
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_token(&self, token: &str) -> CliClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CliClientResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
