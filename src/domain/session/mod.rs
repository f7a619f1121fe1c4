//! Session claims read from request cookies

mod claims;

pub use claims::{Role, SessionClaims, AUTH_ROLE_COOKIE, AUTH_TOKEN_COOKIE};
