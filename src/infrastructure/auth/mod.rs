//! Session token verification

mod session;

pub use session::{SessionTokenClaims, SessionVerifier};
