use acct_core::domain::entities::account::AccountProfile;
use acct_core::domain::entities::credentials::CredentialsInput;
use acct_shared::types::pagination::{Pagination, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub account: AccountProfile,
    pub credentials: CredentialsInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListAccountsQuery {
    #[serde(default)]
    pub offset: u32,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl ListAccountsQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        let query = |limit| ListAccountsQuery { offset: 0, limit };
        assert!(query(1).validate().is_ok());
        assert!(query(100).validate().is_ok());
        assert!(query(0).validate().is_err());
        assert!(query(101).validate().is_err());
    }

    #[test]
    fn test_signup_request_wire_shape() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "account": { "firstName": "Jim", "timezone": -7 },
            "credentials": { "username": "jim", "password": "secret" }
        }))
        .unwrap();

        assert_eq!(request.account.first_name, "Jim");
        assert_eq!(request.account.timezone, -7);
        assert!(request.credentials.is_valid());
    }
}
