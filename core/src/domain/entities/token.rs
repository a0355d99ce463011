//! Opaque bearer tokens and their cache projection.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AuthFailure;

/// Lifetime of a freshly minted token (calendar months)
pub const TOKEN_LIFETIME_MONTHS: u32 = 2;

/// Tokens expiring within this many days are rotated
pub const ROTATION_HORIZON_DAYS: i64 = 7;

/// Durable token record, child of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Store-assigned key
    pub id: Uuid,

    /// Parent account
    pub account_id: Uuid,

    /// Absolute expiry
    pub expiry: DateTime<Utc>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Mints a new token for an account, expiring two months from `now`
    pub fn issue(account_id: Uuid, now: DateTime<Utc>) -> Self {
        Self::issue_with_lifetime(account_id, now, TOKEN_LIFETIME_MONTHS)
    }

    /// Mints a new token with a configured lifetime in months
    pub fn issue_with_lifetime(account_id: Uuid, now: DateTime<Utc>, months: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            expiry: expiry_after(now, months),
            created_at: now,
        }
    }

    /// Externally visible value: a stable encoding of the store key
    pub fn value(&self) -> String {
        encode_token_key(self.id)
    }
}

/// `now` plus the token lifetime
pub fn default_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    expiry_after(now, TOKEN_LIFETIME_MONTHS)
}

/// `now` plus `months` calendar months, clamped to the end of shorter months
pub fn expiry_after(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Encodes a token store key into its opaque string form
pub fn encode_token_key(key: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

/// Decodes an opaque token value back into its store key
pub fn decode_token_key(value: &str) -> Result<Uuid, AuthFailure> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|_| AuthFailure::InvalidTokenEncoding)?;
    Uuid::from_slice(&bytes).map_err(|_| AuthFailure::InvalidTokenEncoding)
}

/// Encodes an account key for the cache projection
pub fn encode_account_key(key: Uuid) -> String {
    key.to_string()
}

/// Decodes an account key read from the cache projection
pub fn decode_account_key(value: &str) -> Result<Uuid, AuthFailure> {
    Uuid::parse_str(value).map_err(|_| AuthFailure::CorruptAccountReference)
}

/// Cache-resident copy of a token. Never authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    /// Opaque token value
    pub token: String,

    /// Encoded owning account key
    pub account_key: String,

    /// Real expiry of the token
    pub expiry: DateTime<Utc>,
}

impl TokenDetails {
    /// Projects a durable token
    pub fn from_token(token: &Token) -> Self {
        Self {
            token: token.value(),
            account_key: encode_account_key(token.account_id),
            expiry: token.expiry,
        }
    }

    /// Expired when the expiry is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }

    /// True when the expiry falls within `horizon` of `now` (inclusive)
    pub fn expires_within(&self, horizon: Duration, now: DateTime<Utc>) -> bool {
        self.expiry - now <= horizon
    }

    /// Remaining lifetime, or `None` once nothing is left
    pub fn ttl_at(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        (self.expiry - now)
            .to_std()
            .ok()
            .filter(|ttl| !ttl.is_zero())
    }
}

/// Replacement token handed back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatedToken {
    /// Opaque value of the new token
    pub value: String,

    /// Expiry of the new token
    pub expiry: DateTime<Utc>,
}

impl From<&Token> for RotatedToken {
    fn from(token: &Token) -> Self {
        Self {
            value: token.value(),
            expiry: token.expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_issue_stamps_two_months() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let token = Token::issue(Uuid::new_v4(), now);
        assert_eq!(token.expiry, Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
        assert_eq!(token.created_at, now);
    }

    #[test]
    fn test_month_end_clamps() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(
            default_expiry(now),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_value_decodes_to_key() {
        let token = Token::issue(Uuid::new_v4(), Utc::now());
        assert_eq!(decode_token_key(&token.value()), Ok(token.id));
    }

    #[test]
    fn test_garbage_value_is_rejected() {
        assert_eq!(decode_token_key("not a token!"), Err(AuthFailure::InvalidTokenEncoding));
        assert_eq!(decode_token_key("ABC123"), Err(AuthFailure::InvalidTokenEncoding));
        assert_eq!(decode_token_key(""), Err(AuthFailure::InvalidTokenEncoding));
    }

    #[test]
    fn test_account_key_round_trip() {
        let account_id = Uuid::new_v4();
        assert_eq!(decode_account_key(&encode_account_key(account_id)), Ok(account_id));
        assert_eq!(
            decode_account_key("corrupt"),
            Err(AuthFailure::CorruptAccountReference)
        );
    }

    #[test]
    fn test_expiry_boundaries() {
        let now = Utc::now();
        let mut details = TokenDetails {
            token: "t".to_string(),
            account_key: encode_account_key(Uuid::new_v4()),
            expiry: now,
        };
        assert!(details.is_expired_at(now));

        details.expiry = now + Duration::days(ROTATION_HORIZON_DAYS);
        assert!(!details.is_expired_at(now));
        assert!(details.expires_within(Duration::days(ROTATION_HORIZON_DAYS), now));

        details.expiry = now + Duration::days(ROTATION_HORIZON_DAYS) + Duration::seconds(1);
        assert!(!details.expires_within(Duration::days(ROTATION_HORIZON_DAYS), now));
    }

    #[test]
    fn test_ttl_is_none_for_expired() {
        let now = Utc::now();
        let details = TokenDetails {
            token: "t".to_string(),
            account_key: encode_account_key(Uuid::new_v4()),
            expiry: now - Duration::seconds(5),
        };
        assert!(details.ttl_at(now).is_none());

        let live = TokenDetails {
            expiry: now + Duration::seconds(90),
            ..details
        };
        assert_eq!(live.ttl_at(now), Some(std::time::Duration::from_secs(90)));
    }
}
