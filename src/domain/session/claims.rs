//! Session claims and role normalization
//!
//! The role claim arrives as a free-form cookie string. Historically the
//! frontend compared it against several spellings ("admin", "Administrador",
//! "Profesor", ...), so normalization happens exactly once, here, and the
//! rest of the codebase only ever sees the closed enum.

use serde::{Deserialize, Serialize};

/// Cookie carrying the opaque session token.
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Cookie carrying the role claim.
pub const AUTH_ROLE_COOKIE: &str = "auth_role";

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Professor,
}

impl Role {
    /// Normalize a raw role claim into the closed enum.
    ///
    /// Unknown or malformed values return `None`, which fails every
    /// role-guard check. A forged or garbage cookie therefore grants
    /// nothing rather than raising an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrador" | "administrator" => Some(Self::Admin),
            "student" | "estudiante" => Some(Self::Student),
            "professor" | "profesor" => Some(Self::Professor),
            _ => None,
        }
    }

    /// The dashboard path this role lands on after login or when bounced
    /// away from an auth page.
    pub fn dashboard_path(role: Option<Role>) -> &'static str {
        match role {
            Some(Role::Admin) => "/dashboard/admin",
            Some(Role::Student) => "/dashboard/student",
            _ => "/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Student => write!(f, "student"),
            Self::Professor => write!(f, "professor"),
        }
    }
}

/// Session state derived from the request cookies.
///
/// Read-only to the guard and validator; expiry is the backend's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClaims {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl SessionClaims {
    /// Anonymous session (no cookies present).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session built from raw cookie values. The role string is normalized;
    /// an unrecognized role degrades to no role.
    pub fn from_cookies(token: Option<String>, role: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            role: role.and_then(Role::parse),
        }
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }
}
