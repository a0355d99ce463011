pub mod auth;
pub mod cookie_auth;
pub mod cors;

pub use auth::{AuthContext, RequestAuthenticator, RotationHeaders, TokenAuth};
pub use cookie_auth::{CookieAuth, CookieSettings};
pub use cors::create_cors;
