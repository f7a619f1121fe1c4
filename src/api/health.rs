//! Liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: ProbeStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<DependencyCheck>,
}

/// Outcome of probing one dependency.
#[derive(Serialize)]
pub struct DependencyCheck {
    pub name: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub latency_ms: u64,
}

impl DependencyCheck {
    fn from_result<T, E: std::fmt::Display>(
        name: &'static str,
        started: Instant,
        result: Result<T, E>,
    ) -> Self {
        Self {
            name,
            ok: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
            latency_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// GET /health - the service itself is up.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: ProbeStatus::Healthy,
        version: env!("CARGO_PKG_VERSION"),
        checks: Vec::new(),
    })
}

/// GET /live - bare liveness probe.
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /ready - verifies the backend and the course catalog respond.
///
/// A failing dependency reports `degraded` but still returns 200: the
/// guard and validation endpoints work without the backend until a
/// request actually needs it.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let backend = DependencyCheck::from_result(
        "backend",
        started,
        state.teams_api.all_teams().await,
    );

    let started = Instant::now();
    let catalog = DependencyCheck::from_result(
        "course_catalog",
        started,
        state.courses.list().await,
    );

    let status = if backend.ok && catalog.ok {
        ProbeStatus::Healthy
    } else {
        ProbeStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: vec![backend, catalog],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ProbeStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&ProbeStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_failed_check_carries_error() {
        let check = DependencyCheck::from_result::<(), _>(
            "backend",
            Instant::now(),
            Err("connection refused"),
        );
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "connection refused");
    }

    #[test]
    fn test_healthy_response_omits_checks() {
        let response = HealthResponse {
            status: ProbeStatus::Healthy,
            version: "0.1.0",
            checks: Vec::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("checks"));
    }
}
