//! Team endpoints: listings, draft validation and lifecycle

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::{RequireAdmin, RequireSession};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::{TeamDraft, ValidationResult};
use crate::domain::{CourseId, StudentId};
use crate::infrastructure::backend::{CreateTeamPayload, TeamMemberRecord, TeamRecord};
use crate::infrastructure::team::TeamService;

pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/user/{email}", get(list_user_teams))
        .route("/validate", post(validate_team))
        .route("/toggle", post(toggle_member))
        .route("/{id}", delete(dissolve_team))
}

/// A student on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub email: String,
    pub name: String,
}

impl From<&MemberDto> for TeamMemberRecord {
    fn from(m: &MemberDto) -> Self {
        TeamMemberRecord {
            email: m.email.clone(),
            name_user: m.name.clone(),
        }
    }
}

/// Draft sent for validation only.
#[derive(Debug, Deserialize)]
pub struct ValidateTeamRequest {
    pub name: String,
    pub creator_email: String,
    pub course_id: String,
    /// Member emails, creator excluded
    pub members: Vec<String>,
}

impl ValidateTeamRequest {
    fn into_draft(self) -> Result<TeamDraft, ApiError> {
        let course_id = CourseId::new(self.course_id).map_err(ApiError::from)?;
        Ok(
            TeamDraft::new(self.name, StudentId::from(self.creator_email), course_id)
                .with_raw_members(self.members.into_iter().map(StudentId::from).collect()),
        )
    }
}

/// Full create request.
#[derive(Debug, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    pub course_id: u64,
    pub creator: MemberDto,
    /// Invited members, creator excluded
    pub members: Vec<MemberDto>,
    pub project_id: u64,
    pub project_name: String,
}

/// Member-toggle check mirroring the selection-time guard.
#[derive(Debug, Deserialize)]
pub struct ToggleMemberRequest {
    pub creator_email: String,
    pub course_id: String,
    pub members: Vec<String>,
    pub candidate: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleMemberResponse {
    pub accepted: bool,
    pub members: Vec<String>,
    pub total_members: usize,
}

/// GET /teams
///
/// The full registry is an admin dashboard view; students only see
/// their own teams through `/teams/user/{email}`.
pub async fn list_teams(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<Vec<TeamRecord>>, ApiError> {
    let teams = state.teams_api.all_teams().await.map_err(ApiError::from)?;
    Ok(Json(teams))
}

/// GET /teams/user/{email}
pub async fn list_user_teams(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Path(email): Path<String>,
) -> Result<Json<Vec<TeamRecord>>, ApiError> {
    let teams = state
        .teams_api
        .user_teams(&email)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(teams))
}

/// POST /teams/validate
///
/// Runs the full submit-time validation without creating anything. Always
/// 200: invalid drafts are a result, not an error.
pub async fn validate_team(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Json(request): Json<ValidateTeamRequest>,
) -> Result<Json<ValidationResult>, ApiError> {
    let draft = request.into_draft()?;
    let result = state
        .team_service
        .validate(&draft)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(result))
}

/// POST /teams/toggle
///
/// Selection-time guard: answers whether flipping a candidate in or out
/// of the draft is allowed, and with what resulting member list.
pub async fn toggle_member(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Json(request): Json<ToggleMemberRequest>,
) -> Result<Json<ToggleMemberResponse>, ApiError> {
    let course_id = CourseId::new(request.course_id).map_err(ApiError::from)?;
    let bounds = state
        .team_service
        .bounds_for(&course_id)
        .await
        .map_err(ApiError::from)?;

    let mut draft = TeamDraft::new("", StudentId::from(request.creator_email), course_id)
        .with_members(request.members.into_iter().map(StudentId::from).collect());

    let accepted = draft.toggle_member(
        StudentId::from(request.candidate),
        bounds.max_team_size,
    );

    Ok(Json(ToggleMemberResponse {
        accepted,
        members: draft.members().iter().map(|m| m.to_string()).collect(),
        total_members: draft.total_members(),
    }))
}

/// POST /teams
///
/// Validates and creates. A draft that fails validation comes back as 422
/// with the full error list; the backend is never called for it.
pub async fn create_team(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<ValidationResult>), ApiError> {
    let course_id = CourseId::new(request.course_id.to_string()).map_err(ApiError::from)?;
    let draft = TeamDraft::new(
        request.name.clone(),
        StudentId::from(request.creator.email.as_str()),
        course_id,
    )
    .with_raw_members(
        request
            .members
            .iter()
            .map(|m| StudentId::from(m.email.as_str()))
            .collect(),
    );

    // Creator leads the student list so the backend records them first.
    let mut students = vec![TeamMemberRecord::from(&request.creator)];
    students.extend(request.members.iter().map(TeamMemberRecord::from));

    let payload = CreateTeamPayload {
        name_team: request.name.trim().to_string(),
        project_id: request.project_id,
        project_name: request.project_name,
        course_id: request.course_id,
        students,
    };

    let result = state
        .team_service
        .submit(&draft, &payload)
        .await
        .map_err(ApiError::from)?;

    let status = if result.is_valid {
        StatusCode::CREATED
    } else {
        debug!(errors = result.errors.len(), "Team draft rejected");
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(result)))
}

/// DELETE /teams/{id}
///
/// Dissolving is creator-only, or admin-only.
pub async fn dissolve_team(
    State(state): State<AppState>,
    RequireSession(claims): RequireSession,
    Path(team_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let records = state.teams_api.all_teams().await.map_err(ApiError::from)?;
    let record = records
        .iter()
        .find(|t| t.id_team.to_string() == team_id)
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found", team_id)))?;

    let token = claims
        .token
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
    let requester = state.auth_api.me(token).await.map_err(ApiError::from)?;

    if !TeamService::can_dissolve(record, &requester.email, claims.role) {
        return Err(ApiError::forbidden(
            "Only the team creator or an admin can dissolve a team",
        ));
    }

    state
        .team_service
        .dissolve(record)
        .await
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
