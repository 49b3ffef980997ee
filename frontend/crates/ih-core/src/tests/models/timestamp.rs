use crate::models::timestamp::parse;

#[test]
fn test_parse_rfc3339_with_offset() {
    let dt = parse("2024-03-01T10:00:00+02:00").unwrap();
    assert_eq!(dt.to_rfc3339(), "2024-03-01T08:00:00+00:00");
}

#[test]
fn test_parse_naive_timestamp_as_utc() {
    let dt = parse("2024-03-01T10:00:00").unwrap();
    assert_eq!(dt.to_rfc3339(), "2024-03-01T10:00:00+00:00");
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse("yesterday").is_none());
}
