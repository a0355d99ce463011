use crate::services::credentials::{hash_password, verify_password};

#[test]
fn test_hash_and_verify() {
    let hash = hash_password("hunter2").unwrap();
    assert_ne!(hash, "hunter2");
    assert!(hash.starts_with("$2"));
    assert!(verify_password("hunter2", &hash).unwrap());
    assert!(!verify_password("hunter3", &hash).unwrap());
}

#[test]
fn test_malformed_hash_is_error() {
    assert!(verify_password("hunter2", "not-a-hash").is_err());
}
