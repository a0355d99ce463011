//! Account entity representing a registered identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;

/// Profile fields supplied at signup and shown back to the owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub locale: String,
    pub location: String,
    pub name: String,
    /// Offset from UTC in hours
    pub timezone: i32,
    pub email: String,
}

/// Lower-cased copies of the searchable profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
}

impl SearchFilters {
    fn from_profile(profile: &AccountProfile) -> Self {
        Self {
            first_name: profile.first_name.to_lowercase(),
            last_name: profile.last_name.to_lowercase(),
            name: profile.name.to_lowercase(),
        }
    }
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,

    #[serde(flatten)]
    pub profile: AccountProfile,

    /// Attached photo, if one was uploaded
    pub photo: Option<Attachment>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with a fresh identifier
    pub fn new(profile: AccountProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile,
            photo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Search filters derived from the current profile; recomputed on every save
    pub fn search_filters(&self) -> SearchFilters {
        SearchFilters::from_profile(&self.profile)
    }

    /// Replaces the account photo
    pub fn set_photo(&mut self, photo: Attachment) {
        self.photo = Some(photo);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AccountProfile {
        AccountProfile {
            first_name: "Jim".to_string(),
            last_name: "McDonald".to_string(),
            name: "Jim McDonald".to_string(),
            email: "jim@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_account_gets_unique_id() {
        let a = Account::new(profile());
        let b = Account::new(profile());
        assert_ne!(a.id, b.id);
        assert!(a.photo.is_none());
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_search_filters_are_lowercase() {
        let filters = Account::new(profile()).search_filters();
        assert_eq!(filters.first_name, "jim");
        assert_eq!(filters.last_name, "mcdonald");
        assert_eq!(filters.name, "jim mcdonald");
    }

    #[test]
    fn test_set_photo_touches_updated_at() {
        let mut account = Account::new(profile());
        let before = account.updated_at;
        account.set_photo(Attachment::new("image/png"));
        assert!(account.photo.is_some());
        assert!(account.updated_at >= before);
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let json = serde_json::to_value(Account::new(profile())).unwrap();
        assert_eq!(json["firstName"], "Jim");
        assert_eq!(json["email"], "jim@example.com");
        assert!(json.get("profile").is_none());
    }
}
