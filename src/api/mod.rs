//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod courses;
pub mod health;
pub mod middleware;
pub mod projects;
pub mod router;
pub mod state;
pub mod teams;
pub mod types;
pub mod users;

pub use middleware::{RequireAdmin, RequireSession, Session};
pub use router::{create_router, create_router_with_state};
pub use state::AppState;
