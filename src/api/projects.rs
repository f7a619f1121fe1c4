//! Project catalog endpoints

use axum::{extract::State, routing::get, Router};

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::backend::ProjectRecord;

pub fn create_projects_router() -> Router<AppState> {
    Router::new().route("/", get(list_projects))
}

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
) -> Result<Json<Vec<ProjectRecord>>, ApiError> {
    let projects = state
        .projects_api
        .all_projects()
        .await
        .map_err(ApiError::from)?;
    Ok(Json(projects))
}
