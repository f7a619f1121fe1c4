//! Infrastructure layer - External service implementations

pub mod auth;
pub mod backend;
pub mod course;
pub mod logging;
pub mod team;
