//! Guard table - path classification rules
//!
//! Classification is a pure function of the path string. Role-guard entries
//! are matched by longest prefix, so the order entries are declared in never
//! changes the outcome.

use serde::Deserialize;

use crate::domain::session::Role;

/// A path prefix that requires an exact role match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleGuard {
    pub prefix: String,
    pub required_role: Role,
}

impl RoleGuard {
    pub fn new(prefix: impl Into<String>, required_role: Role) -> Self {
        Self {
            prefix: prefix.into(),
            required_role,
        }
    }
}

/// How a path is classified by the guard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Framework assets, never intercepted at all
    Asset,
    /// Login/register pages, bounced away from when already authenticated
    AuthPage,
    /// No session required
    Public,
    /// Requires an exact role match
    RoleGuarded,
    /// Requires any valid session
    DefaultProtected,
}

/// Path classification rules for the route guard.
#[derive(Debug, Clone)]
pub struct GuardTable {
    asset_prefixes: Vec<String>,
    auth_pages: Vec<String>,
    public_paths: Vec<String>,
    role_guards: Vec<RoleGuard>,
}

impl Default for GuardTable {
    fn default() -> Self {
        Self {
            asset_prefixes: ["/_next", "/icons", "/images", "/favicon"]
                .map(String::from)
                .to_vec(),
            auth_pages: ["/auth/login", "/auth/register"].map(String::from).to_vec(),
            public_paths: ["/auth/login", "/auth/register", "/"]
                .map(String::from)
                .to_vec(),
            role_guards: vec![
                RoleGuard::new("/dashboard/admin", Role::Admin),
                RoleGuard::new("/admin", Role::Admin),
                RoleGuard::new("/dashboard/student", Role::Student),
            ],
        }
    }
}

impl GuardTable {
    pub fn new(role_guards: Vec<RoleGuard>) -> Self {
        Self {
            role_guards,
            ..Self::default()
        }
    }

    pub fn role_guards(&self) -> &[RoleGuard] {
        &self.role_guards
    }

    pub fn is_auth_page(&self, path: &str) -> bool {
        self.auth_pages.iter().any(|p| p == path)
    }

    pub fn is_asset(&self, path: &str) -> bool {
        self.asset_prefixes.iter().any(|p| path.starts_with(p))
    }

    /// Public paths match exactly or by `<path>/` extension.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|p| path == p || path.starts_with(&format!("{}/", p)))
    }

    /// Find the role-guard entry for a path, preferring the longest
    /// matching prefix so `/dashboard/admin` wins over `/dashboard`.
    pub fn matching_guard(&self, path: &str) -> Option<&RoleGuard> {
        self.role_guards
            .iter()
            .filter(|g| path.starts_with(&g.prefix))
            .max_by_key(|g| g.prefix.len())
    }

    /// Classify a path. Every path maps to exactly one class.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_asset(path) {
            RouteClass::Asset
        } else if self.is_auth_page(path) {
            RouteClass::AuthPage
        } else if self.is_public(path) {
            RouteClass::Public
        } else if self.matching_guard(path).is_some() {
            RouteClass::RoleGuarded
        } else {
            RouteClass::DefaultProtected
        }
    }
}
