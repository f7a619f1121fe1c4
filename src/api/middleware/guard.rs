//! Route-guard middleware
//!
//! Applies the guard decision to every inbound request. Allow and bypass
//! both fall through to the inner service; the two redirect decisions
//! become 307 responses so method and body survive the hop.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::domain::guard::{evaluate, GuardDecision};

use super::session::claims_from_headers;

pub async fn route_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let claims = claims_from_headers(request.headers(), &state.verifier);

    let decision = evaluate(&state.guard_table, &path, &claims);
    match decision {
        GuardDecision::Allow | GuardDecision::Bypass => next.run(request).await,
        decision => {
            // redirect_path is Some for both redirect variants
            let target = decision
                .redirect_path()
                .unwrap_or_else(|| "/auth/login".to_string());
            debug!(path = %path, target = %target, "Guard redirecting request");
            Redirect::temporary(&target).into_response()
        }
    }
}
