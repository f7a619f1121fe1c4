//! Campus Teams Gateway
//!
//! An edge service for an academic team-management platform:
//! - Cookie-based session handling with optional signed-token verification
//! - A route guard enforcing per-role navigation rules
//! - Team draft validation against course size bounds and existing memberships
//! - Thin clients for the academic backend (auth, teams, projects, users)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::course::CourseRepository;
use infrastructure::auth::SessionVerifier;
use infrastructure::backend::{
    BackendAuthClient, BackendCatalogClient, BackendClient, BackendTeamsClient,
};
use infrastructure::course::CatalogCourseRepository;
use infrastructure::team::TeamService;

/// Wire the application state from configuration.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, domain::DomainError> {
    let http = BackendClient::with_timeout(
        config.backend.base_url.clone(),
        Duration::from_secs(config.backend.timeout_secs),
    )?;

    let auth_api = Arc::new(BackendAuthClient::new(http.clone()));
    let teams_api = Arc::new(BackendTeamsClient::new(http.clone()));
    let catalog = Arc::new(BackendCatalogClient::new(http));

    let courses: Arc<dyn CourseRepository> = Arc::new(CatalogCourseRepository::new());
    let team_service = Arc::new(TeamService::new(courses.clone(), teams_api.clone()));

    let verifier = match config.session.jwt_secret.as_deref() {
        Some(secret) => Arc::new(SessionVerifier::with_secret(secret)),
        None => Arc::new(SessionVerifier::trusting()),
    };
    tracing::info!(
        token_verification = verifier.is_verifying(),
        backend = %config.backend.base_url,
        "Gateway state initialized"
    );

    Ok(AppState {
        guard_table: Arc::new(config.guard.table()),
        verifier,
        team_service,
        courses,
        auth_api,
        teams_api,
        projects_api: catalog.clone(),
        users_api: catalog,
    })
}
