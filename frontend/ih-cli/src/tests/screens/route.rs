use crate::screens::Route;

use serde_json::json;

#[test]
fn test_route_paths() {
    assert_eq!(Route::Login.to_string(), "/login");
    assert_eq!(Route::Projects.to_string(), "/projects");
    assert_eq!(Route::Project(3).to_string(), "/projects/3");
    assert_eq!(Route::Issue(42).to_string(), "/issues/42");
}

#[test]
fn test_route_serializes_with_screen_tag() {
    assert_eq!(
        serde_json::to_value(Route::Issue(42)).unwrap(),
        json!({"screen": "issue", "id": 42})
    );
    assert_eq!(
        serde_json::to_value(Route::Login).unwrap(),
        json!({"screen": "login"})
    );
}
