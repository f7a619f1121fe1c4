//! Session extractors backed by the auth cookies

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::session::{
    Role, SessionClaims, AUTH_ROLE_COOKIE, AUTH_TOKEN_COOKIE,
};
use crate::infrastructure::auth::SessionVerifier;

/// Build session claims from the request's Cookie headers.
pub fn claims_from_headers(headers: &HeaderMap, verifier: &SessionVerifier) -> SessionClaims {
    let mut token = None;
    let mut role = None;

    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for c in cookie::Cookie::split_parse(raw).flatten() {
            match c.name() {
                AUTH_TOKEN_COOKIE => token = Some(c.value().to_string()),
                AUTH_ROLE_COOKIE => role = Some(c.value().to_string()),
                _ => {}
            }
        }
    }

    verifier.ingest(token.as_deref(), role.as_deref())
}

/// Session claims, possibly anonymous. Never rejects.
#[derive(Debug, Clone)]
pub struct Session(pub SessionClaims);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session(claims_from_headers(&parts.headers, &state.verifier)))
    }
}

/// Extractor that requires an authenticated session.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionClaims);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_headers(&parts.headers, &state.verifier);
        if !claims.authenticated() {
            return Err(ApiError::unauthorized("Authentication required"));
        }
        Ok(RequireSession(claims))
    }
}

/// Extractor that requires an authenticated admin.
///
/// An absent or unrecognized role claim fails the check; nothing is
/// granted by default.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub SessionClaims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireSession(claims) = RequireSession::from_request_parts(parts, state).await?;
        if claims.role != Some(Role::Admin) {
            return Err(ApiError::forbidden("Admin access required"));
        }
        Ok(RequireAdmin(claims))
    }
}
