//! REST wrappers for the course backend
//!
//! Thin clients over the Spring-style backend API. Each client sits behind
//! a trait so handlers and services can be tested against mocks.

mod auth;
mod catalog;
mod http;
mod teams;

pub use auth::{
    AuthApi, BackendAuthClient, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse,
    UserInfo,
};
pub use catalog::{
    BackendCatalogClient, ProjectRecord, ProjectsApi, UserRecord, UsersApi,
};
pub use http::BackendClient;
pub use teams::{
    BackendTeamsClient, CreateTeamPayload, TeamMemberRecord, TeamRecord, TeamsApi,
};
