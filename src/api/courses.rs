//! Course catalog endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::course::Course;
use crate::domain::CourseId;

pub fn create_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/{id}", get(get_course))
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub semester: u8,
    pub active: bool,
    pub min_team_size: usize,
    pub max_team_size: usize,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            semester: course.semester(),
            active: course.is_active(),
            min_team_size: course.bounds().min_team_size,
            max_team_size: course.bounds().max_team_size,
        }
    }
}

/// GET /courses
pub async fn list_courses(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = state.courses.list().await.map_err(ApiError::from)?;
    Ok(Json(courses.iter().map(CourseResponse::from).collect()))
}

/// GET /courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course_id = CourseId::new(id).map_err(ApiError::from)?;
    let course = state
        .courses
        .get(&course_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Course '{}' not found", course_id)))?;
    Ok(Json(CourseResponse::from(&course)))
}
