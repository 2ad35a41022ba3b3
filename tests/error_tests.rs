//! Tests for catalog error construction and message formatting

use lumi_catalog::error::CatalogError;

#[test]
fn test_parse_error_message() {
    let err = CatalogError::parse("unexpected end of stream", 118);
    let msg = err.to_string();
    assert!(msg.contains("Parse error"));
    assert!(msg.contains("unexpected end of stream"));
    assert!(msg.contains("118"));
}

#[test]
fn test_name_collision_message() {
    let err = CatalogError::NameCollision {
        name: "Enemy".to_string(),
        existing: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("Name collision"));
    assert!(msg.contains("Enemy"));
    assert!(msg.contains('1'));
}

#[test]
fn test_missing_name_message() {
    let err = CatalogError::MissingName {
        tag: "sprite".to_string(),
        offset: 64,
    };
    let msg = err.to_string();
    assert!(msg.contains("<sprite>"));
    assert!(msg.contains("64"));
}

#[test]
fn test_not_found_classification() {
    assert!(CatalogError::NotFound("Ghost".to_string()).is_not_found());
    assert!(CatalogError::IdNotFound(7).is_not_found());
    assert!(!CatalogError::Unsupported("save".to_string()).is_not_found());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err: CatalogError = io.into();
    assert!(matches!(err, CatalogError::IoError(_)));
    assert!(err.to_string().contains("read-only"));
}
