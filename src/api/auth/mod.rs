//! Authentication endpoints
//!
//! The gateway fronts the backend's token auth and owns the session
//! cookies: login stores `auth_token`/`auth_role`, logout clears them.

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::session::{Role, AUTH_ROLE_COOKIE, AUTH_TOKEN_COOKIE};
use crate::infrastructure::backend::{LoginRequest, RegisterRequest, RegisterResponse, UserInfo};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/refresh", post(refresh))
        .route("/me", get(me))
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub expires_at: String,
}

fn session_cookie(name: &str, value: &str, max_age_secs: i64, http_only: bool) -> String {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(http_only)
        .max_age(cookie::time::Duration::seconds(max_age_secs))
        .build()
        .to_string()
}

/// POST /auth/login
///
/// Authenticates against the backend and sets the session cookies. The
/// role cookie carries the normalized role name so downstream consumers
/// never see the backend's free-form spelling.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tokens = state
        .auth_api
        .login(&request)
        .await
        .map_err(|_| ApiError::unauthorized("Invalid email or password"))?;

    let user = state
        .auth_api
        .me(&tokens.access_token)
        .await
        .map_err(ApiError::from)?;

    let role = Role::parse(&user.role);
    let max_age = tokens.expires_in as i64;

    let mut cookies = vec![session_cookie(
        AUTH_TOKEN_COOKIE,
        &tokens.access_token,
        max_age,
        true,
    )];
    if let Some(role) = role {
        cookies.push(session_cookie(
            AUTH_ROLE_COOKIE,
            &role.to_string(),
            max_age,
            false,
        ));
    }

    info!(email = %user.email, role = ?role, "User logged in");

    let expires_at = (Utc::now() + Duration::seconds(max_age)).to_rfc3339();
    let headers: Vec<(header::HeaderName, String)> = cookies
        .into_iter()
        .map(|c| (header::SET_COOKIE, c))
        .collect();

    Ok((
        AppendHeaders(headers),
        Json(LoginResponse { user, expires_at }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct RegisterApiRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// POST /auth/register
///
/// Creates a new account through the backend's user controller. Public,
/// like the login page; no session cookies are issued until login.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterApiRequest>,
) -> Result<(axum::http::StatusCode, Json<RegisterResponse>), ApiError> {
    let response = state
        .auth_api
        .register(&RegisterRequest {
            email: request.email.clone(),
            name_user: request.name,
            password: request.password,
        })
        .await
        .map_err(ApiError::from)?;

    info!(email = %request.email, "User registered");
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

/// POST /auth/logout
///
/// Notifies the backend and expires both session cookies.
pub async fn logout(
    State(state): State<AppState>,
    RequireSession(_): RequireSession,
    Json(request): Json<LogoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // A backend failure still clears the local session.
    if let Err(e) = state.auth_api.logout(&request.email).await {
        tracing::warn!(email = %request.email, "Backend logout failed: {}", e);
    }

    info!(email = %request.email, "User logged out");

    let headers: Vec<(header::HeaderName, String)> = [
        session_cookie(AUTH_TOKEN_COOKIE, "", 0, true),
        session_cookie(AUTH_ROLE_COOKIE, "", 0, false),
    ]
    .into_iter()
    .map(|c| (header::SET_COOKIE, c))
    .collect();

    Ok((AppendHeaders(headers), axum::http::StatusCode::NO_CONTENT))
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub expires_at: String,
}

/// POST /auth/refresh
///
/// Exchanges the refresh token for a fresh access token and rotates the
/// `auth_token` cookie. The role cookie is untouched.
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tokens = state
        .auth_api
        .refresh(&request.refresh_token)
        .await
        .map_err(|_| ApiError::unauthorized("Refresh token rejected"))?;

    let max_age = tokens.expires_in as i64;
    let cookie = session_cookie(AUTH_TOKEN_COOKIE, &tokens.access_token, max_age, true);
    let expires_at = (Utc::now() + Duration::seconds(max_age)).to_rfc3339();

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(RefreshResponse { expires_at }),
    ))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireSession(claims): RequireSession,
) -> Result<Json<UserInfo>, ApiError> {
    let token = claims
        .token
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
    let user = state.auth_api.me(&token).await.map_err(ApiError::from)?;
    Ok(Json(user))
}
