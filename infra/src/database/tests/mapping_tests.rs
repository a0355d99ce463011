//! Row mapping helpers, tested without a database

use acct_core::domain::entities::credentials::StoredCredential;

use crate::database::mysql::{
    credential_columns, photo_from_columns, stored_credential_from_columns,
};

#[test]
fn test_password_columns() {
    let stored = StoredCredential::Password {
        username: "jim".to_string(),
        password_hash: "$2b$10$hash".to_string(),
    };

    let (kind, username, hash, provider_id, provider_name) = credential_columns(&stored);
    assert_eq!(kind, "password");
    assert_eq!(username, Some("jim"));
    assert_eq!(hash, Some("$2b$10$hash"));
    assert!(provider_id.is_none() && provider_name.is_none());

    let back = stored_credential_from_columns(
        kind,
        username.map(str::to_string),
        hash.map(str::to_string),
        None,
        None,
    )
    .unwrap();
    assert_eq!(back, stored);
}

#[test]
fn test_provider_columns() {
    let stored = StoredCredential::Provider {
        provider_id: "1234".to_string(),
        provider_name: "facebook".to_string(),
    };

    let (kind, username, _, provider_id, provider_name) = credential_columns(&stored);
    assert_eq!(kind, "provider");
    assert!(username.is_none());
    assert_eq!(provider_id, Some("1234"));
    assert_eq!(provider_name, Some("facebook"));
}

#[test]
fn test_incomplete_row_is_rejected() {
    let result = stored_credential_from_columns(
        "provider",
        None,
        None,
        Some("1234".to_string()),
        None,
    );
    assert!(result.is_err());

    let result = stored_credential_from_columns("mystery", None, None, None, None);
    assert!(result.is_err());
}

#[test]
fn test_photo_requires_both_columns() {
    assert!(photo_from_columns(Some("n".to_string()), None).is_none());
    let photo = photo_from_columns(Some("n".to_string()), Some("image/png".to_string())).unwrap();
    assert_eq!(photo.content_type, "image/png");
}
