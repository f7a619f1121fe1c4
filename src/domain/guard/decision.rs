//! Guard evaluation
//!
//! `evaluate` is a pure function of (table, path, claims). It never touches
//! cookies and holds no state, so the same inputs always yield the same
//! decision.

use crate::domain::session::{Role, SessionClaims};

use super::table::GuardTable;

/// Outcome of guarding a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through
    Allow,
    /// Asset path, not intercepted at all
    Bypass,
    /// Send to the login page, carrying the original path for the
    /// post-login return trip
    RedirectLogin { next: String },
    /// Send to the role-specific dashboard
    RedirectDashboard { role: Option<Role> },
}

impl GuardDecision {
    /// The redirect target, if this decision is a redirect.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            Self::Allow | Self::Bypass => None,
            Self::RedirectLogin { next } => Some(format!(
                "/auth/login?next={}",
                urlencoding::encode(next)
            )),
            Self::RedirectDashboard { role } => {
                Some(Role::dashboard_path(*role).to_string())
            }
        }
    }
}

/// Decide what to do with a request, in fixed precedence order.
pub fn evaluate(table: &GuardTable, path: &str, claims: &SessionClaims) -> GuardDecision {
    // Authenticated users have no business on the auth pages or the root;
    // bounce them to their dashboard.
    if claims.authenticated() && (table.is_auth_page(path) || path == "/") {
        return GuardDecision::RedirectDashboard { role: claims.role };
    }

    if table.is_asset(path) {
        return GuardDecision::Bypass;
    }

    if table.is_public(path) {
        return GuardDecision::Allow;
    }

    if !claims.authenticated() {
        return GuardDecision::RedirectLogin {
            next: path.to_string(),
        };
    }

    if let Some(guard) = table.matching_guard(path) {
        if claims.role != Some(guard.required_role) {
            return GuardDecision::RedirectDashboard { role: None };
        }
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_session(role: Option<Role>) -> SessionClaims {
        SessionClaims {
            token: Some("tok".to_string()),
            role,
        }
    }

    #[test]
    fn test_authenticated_on_auth_page_redirects_to_dashboard() {
        let table = GuardTable::default();

        let d = evaluate(&table, "/auth/login", &with_session(Some(Role::Admin)));
        assert_eq!(d.redirect_path().as_deref(), Some("/dashboard/admin"));

        let d = evaluate(&table, "/auth/register", &with_session(Some(Role::Student)));
        assert_eq!(d.redirect_path().as_deref(), Some("/dashboard/student"));

        let d = evaluate(&table, "/auth/login", &with_session(Some(Role::Professor)));
        assert_eq!(d.redirect_path().as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_authenticated_on_root_redirects_to_dashboard() {
        let table = GuardTable::default();
        let d = evaluate(&table, "/", &with_session(Some(Role::Admin)));
        assert_eq!(
            d,
            GuardDecision::RedirectDashboard {
                role: Some(Role::Admin)
            }
        );
    }

    #[test]
    fn test_assets_bypass_regardless_of_session() {
        let table = GuardTable::default();
        for path in ["/_next/data.json", "/icons/x.svg", "/images/a.png", "/favicon.ico"] {
            assert_eq!(
                evaluate(&table, path, &SessionClaims::anonymous()),
                GuardDecision::Bypass
            );
            assert_eq!(
                evaluate(&table, path, &with_session(Some(Role::Student))),
                GuardDecision::Bypass
            );
        }
    }

    #[test]
    fn test_public_paths_allow_without_session() {
        let table = GuardTable::default();
        for path in ["/auth/login", "/auth/register", "/"] {
            assert_eq!(
                evaluate(&table, path, &SessionClaims::anonymous()),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn test_anonymous_redirects_to_login_with_next() {
        let table = GuardTable::default();
        let d = evaluate(&table, "/cursos/1/equipos", &SessionClaims::anonymous());
        assert_eq!(
            d,
            GuardDecision::RedirectLogin {
                next: "/cursos/1/equipos".to_string()
            }
        );
        assert_eq!(
            d.redirect_path().as_deref(),
            Some("/auth/login?next=%2Fcursos%2F1%2Fequipos")
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_plain_dashboard() {
        let table = GuardTable::default();

        let d = evaluate(&table, "/admin/usuarios", &with_session(Some(Role::Student)));
        assert_eq!(d.redirect_path().as_deref(), Some("/dashboard"));

        // Missing role fails the check too.
        let d = evaluate(&table, "/admin/usuarios", &with_session(None));
        assert_eq!(d.redirect_path().as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_role_match_allows() {
        let table = GuardTable::default();
        assert_eq!(
            evaluate(&table, "/admin/usuarios", &with_session(Some(Role::Admin))),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(
                &table,
                "/dashboard/student",
                &with_session(Some(Role::Student))
            ),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_default_protected_allows_any_session() {
        let table = GuardTable::default();
        assert_eq!(
            evaluate(&table, "/equipos", &with_session(Some(Role::Professor))),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(&table, "/dashboard", &with_session(None)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let table = GuardTable::default();
        let claims = with_session(Some(Role::Student));
        let first = evaluate(&table, "/dashboard/admin", &claims);
        let second = evaluate(&table, "/dashboard/admin", &claims);
        assert_eq!(first, second);
    }
}
