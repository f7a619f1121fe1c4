//! API middleware components

pub mod guard;
pub mod session;

pub use guard::route_guard;
pub use session::{claims_from_headers, RequireAdmin, RequireSession, Session};
