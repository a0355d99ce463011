pub mod account;
pub mod attachment;
pub mod auth;
pub mod error;

pub use account::{ListAccountsQuery, SignupRequest};
pub use attachment::{AttachmentQuery, CreateAttachmentRequest};
pub use auth::TokenResponse;
pub use error::{ErrorResponse, ErrorResponseExt};
