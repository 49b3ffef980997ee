use crate::screens::Route;
use crate::session::SessionStore;
use crate::{CliClientResult, Client};

use std::sync::Arc;

use ih_core::{LoginRequest, SignupRequest, User};
use log::{error, info, warn};

/// Who is logged in.
///
/// Owns the token lifecycle: created by login/signup, validated by the
/// startup `restore()`, destroyed by logout or a rejected profile fetch.
pub struct AuthSession {
    client: Client,
    store: Arc<dyn SessionStore>,
    user: Option<User>,
    loading: bool,
}

impl AuthSession {
    /// Start in the loading state; call `restore()` to resolve it.
    pub fn new(client: Client) -> Self {
        let store = client.session();
        Self {
            client,
            store,
            user: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True until the startup check has completed
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Where to go once loading is done
    pub fn landing_route(&self) -> Option<Route> {
        if self.loading {
            None
        } else if self.is_authenticated() {
            Some(Route::Projects)
        } else {
            Some(Route::Login)
        }
    }

    /// Startup check: validate a stored token by fetching the profile.
    ///
    /// A rejected token is cleared and the session proceeds unauthenticated.
    pub async fn restore(&mut self) {
        if self.store.token().is_some() {
            match self.client.me().await {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    self.user = Some(user);
                }
                Err(e) => {
                    warn!("Stored session rejected, clearing it: {e}");
                    self.clear_session();
                }
            }
        }

        self.loading = false;
    }

    /// Log in and load the profile. No token is kept on failure.
    pub async fn login(&mut self, credentials: &LoginRequest) -> CliClientResult<Route> {
        let token = self.client.login(credentials).await?;
        self.establish(&token.access_token).await
    }

    /// Register, then behave exactly like login.
    pub async fn signup(&mut self, profile: &SignupRequest) -> CliClientResult<Route> {
        let token = self.client.signup(profile).await?;
        self.establish(&token.access_token).await
    }

    /// Forget the session. Makes no server call; safe to repeat.
    pub fn logout(&mut self) -> Route {
        self.clear_session();
        self.loading = false;
        info!("Logged out");
        Route::Login
    }

    async fn establish(&mut self, token: &str) -> CliClientResult<Route> {
        self.store.store_token(token)?;

        match self.client.me().await {
            Ok(user) => {
                info!("Logged in as {}", user.email);
                self.user = Some(user);
                self.loading = false;
                Ok(Route::Projects)
            }
            Err(e) => {
                self.clear_session();
                Err(e)
            }
        }
    }

    fn clear_session(&mut self) {
        self.user = None;
        if let Err(e) = self.store.clear() {
            error!("Failed to clear stored session: {e}");
        }
    }
}
