use crate::{Client, MemorySessionStore, SessionStore};

use std::sync::Arc;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/api/", Arc::new(MemorySessionStore::new()));
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000/api", Arc::new(MemorySessionStore::new()));
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_session_shared_with_clones() {
    let client = Client::new("http://localhost:8000/api", Arc::new(MemorySessionStore::new()));
    let clone = client.clone();

    client.session().store_token("abc").unwrap();

    assert_eq!(clone.session().token(), Some("abc".to_string()));
}
