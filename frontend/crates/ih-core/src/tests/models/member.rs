use crate::{Member, ProjectRole, UNKNOWN_ASSIGNEE, assignee_name, member_name};

use serde_json::json;

fn members() -> Vec<Member> {
    serde_json::from_value(json!([
        {"id": 1, "name": "Alice", "email": "alice@example.com", "role": "maintainer"},
        {"id": 2, "name": "Bob", "email": "bob@example.com", "role": "member"}
    ]))
    .unwrap()
}

#[test]
fn test_members_deserialize_roles() {
    let members = members();
    assert_eq!(members[0].role, ProjectRole::Maintainer);
    assert_eq!(members[1].role, ProjectRole::Member);
}

#[test]
fn test_member_name_resolves_by_user_id() {
    let members = members();
    assert_eq!(member_name(&members, 2), Some("Bob"));
    assert_eq!(member_name(&members, 3), None);
}

#[test]
fn test_assignee_name_falls_back_for_non_member() {
    let members = members();
    assert_eq!(assignee_name(&members, 1), "Alice");
    assert_eq!(assignee_name(&members, 9), UNKNOWN_ASSIGNEE);
    assert_eq!(assignee_name(&[], 1), "Assigned");
}
