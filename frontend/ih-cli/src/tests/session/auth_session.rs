use crate::screens::Route;
use crate::{AuthSession, Client, MemorySessionStore, SessionStore};

use std::sync::Arc;

fn offline_session(token: Option<&str>) -> (AuthSession, Arc<MemorySessionStore>) {
    let store = Arc::new(match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::new(),
    });
    // Nothing listens here; tests below never reach the network
    let client = Client::new("http://127.0.0.1:9/api", store.clone());
    (AuthSession::new(client), store)
}

#[test]
fn test_new_session_is_loading() {
    let (auth, _) = offline_session(None);

    assert!(auth.is_loading());
    assert!(!auth.is_authenticated());
    assert_eq!(auth.landing_route(), None);
}

#[tokio::test]
async fn test_restore_without_token_skips_network() {
    let (mut auth, _) = offline_session(None);

    auth.restore().await;

    assert!(!auth.is_loading());
    assert_eq!(auth.landing_route(), Some(Route::Login));
}

#[test]
fn test_logout_is_idempotent() {
    let (mut auth, store) = offline_session(Some("token"));

    assert_eq!(auth.logout(), Route::Login);
    assert_eq!(auth.logout(), Route::Login);

    assert_eq!(store.token(), None);
    assert!(auth.user().is_none());
    assert!(!auth.is_loading());
}
