//! Shared fixtures for the wiremock-backed integration tests
#![allow(dead_code)]

use ih_cli::{AuthSession, Client, MemorySessionStore};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TOKEN: &str = "test-token";
pub const CREATED_AT: &str = "2026-01-15T10:00:00";

pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Client whose session holds `token`, plus a handle on that session
pub fn client(server: &MockServer, token: Option<&str>) -> (Client, Arc<MemorySessionStore>) {
    let store = Arc::new(match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::new(),
    });
    let client = Client::new(&api_url(server), store.clone());
    (client, store)
}

/// Client and restored auth session for user 1 (Ada)
pub async fn logged_in(server: &MockServer) -> (Client, AuthSession) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user_json(1, "Ada", "ada@example.com")),
        )
        .mount(server)
        .await;

    let (client, _) = client(server, Some(TOKEN));
    let mut auth = AuthSession::new(client.clone());
    auth.restore().await;
    assert!(auth.is_authenticated());

    (client, auth)
}

pub fn user_json(id: i64, name: &str, email: &str) -> Value {
    json!({"id": id, "name": name, "email": email})
}

pub fn project_json(id: i64, name: &str, key: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "key": key,
        "description": null,
        "start_date": null,
        "created_at": CREATED_AT
    })
}

pub fn member_json(id: i64, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": role
    })
}

pub fn issue_json(
    id: i64,
    project_id: i64,
    title: &str,
    status: &str,
    priority: &str,
    assignee_id: Option<i64>,
) -> Value {
    json!({
        "id": id,
        "project_id": project_id,
        "title": title,
        "description": null,
        "status": status,
        "priority": priority,
        "reporter_id": 1,
        "assignee_id": assignee_id,
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT
    })
}

pub fn comment_json(id: i64, issue_id: i64, body: &str) -> Value {
    json!({
        "id": id,
        "issue_id": issue_id,
        "author_id": 1,
        "body": body,
        "created_at": CREATED_AT
    })
}
