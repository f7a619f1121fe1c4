//! User directory endpoints

use axum::{extract::State, routing::get, Router};

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::backend::UserRecord;

pub fn create_users_router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// GET /users
///
/// The full directory, used to pick invitees when drafting a team.
pub async fn list_users(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = state.users_api.all_users().await.map_err(ApiError::from)?;
    Ok(Json(users))
}
