//! Domain entities representing core business objects.

pub mod account;
pub mod attachment;
pub mod credentials;
pub mod token;

// Re-export commonly used types
pub use account::{Account, AccountProfile, SearchFilters};
pub use attachment::{decode_attachment_data, Attachment, AttachmentSource};
pub use credentials::{CredentialRecord, Credentials, CredentialsInput, StoredCredential};
pub use token::{
    RotatedToken, Token, TokenDetails, ROTATION_HORIZON_DAYS, TOKEN_LIFETIME_MONTHS,
};
