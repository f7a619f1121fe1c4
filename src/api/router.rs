use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::courses;
use super::health;
use super::middleware::route_guard;
use super::projects;
use super::state::AppState;
use super::teams;
use super::types::ApiError;
use super::users;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Session endpoints (login is reachable anonymously)
        .nest("/auth", auth::create_auth_router())
        // Resources
        .nest("/teams", teams::create_teams_router())
        .nest("/courses", courses::create_courses_router())
        .nest("/projects", projects::create_projects_router())
        .nest("/users", users::create_users_router())
        // The fallback keeps the guard in the path of navigation URLs the
        // gateway itself does not serve, so redirects still fire for them.
        .fallback(not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            route_guard,
        ))
        // Probe endpoints sit outside the guard
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Resource not found")
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::api::state::test_support::{test_state, StubBackend};

    #[tokio::test]
    async fn test_minimal_router_serves_health() {
        let response = create_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_guard_redirects_anonymous_dashboard_request() {
        let app = create_router_with_state(test_state(StubBackend::default()));
        let response = app
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/login?next=%2Fdashboard"
        );
    }

    #[tokio::test]
    async fn test_health_probe_is_not_guarded() {
        let app = create_router_with_state(test_state(StubBackend::default()));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_authenticated_course_listing_passes_guard() {
        let app = create_router_with_state(test_state(StubBackend::default()));
        let response = app
            .oneshot(
                Request::get("/courses")
                    .header(header::COOKIE, "auth_token=tok; auth_role=student")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_authenticated_unknown_navigation_path_is_not_found() {
        let app = create_router_with_state(test_state(StubBackend::default()));
        let response = app
            .oneshot(
                Request::get("/cursos/4/equipos")
                    .header(header::COOKIE, "auth_token=tok; auth_role=student")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
