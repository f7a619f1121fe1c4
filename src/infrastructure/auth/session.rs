//! Session ingestion with optional signed-token verification
//!
//! The `auth_role` cookie is client-writable, so trusting it for
//! authorization is a forgery hole. When a JWT secret is configured the
//! role comes from the verified token claims and the role cookie is
//! ignored entirely; without a secret the verifier falls back to the
//! cookie role, which matches the legacy behavior and is logged as a
//! degraded mode at startup.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::session::{Role, SessionClaims};

/// Claims carried by the backend-issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokenClaims {
    /// Subject (user email)
    pub sub: String,
    /// Role claim
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

/// Turns raw cookie values into `SessionClaims`.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: Option<DecodingKey>,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("verified", &self.decoding_key.is_some())
            .finish()
    }
}

impl SessionVerifier {
    /// Verifier that validates tokens against a shared secret.
    pub fn with_secret(secret: &str) -> Self {
        Self {
            decoding_key: Some(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    /// Verifier that trusts the role cookie (legacy mode).
    pub fn trusting() -> Self {
        warn!("No session secret configured; role cookie will be trusted as-is");
        Self { decoding_key: None }
    }

    /// Whether tokens are cryptographically verified.
    pub fn is_verifying(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Build session claims from the raw cookie values.
    ///
    /// With verification enabled, an invalid or expired token yields an
    /// anonymous session; a valid one yields the role from its claims.
    pub fn ingest(&self, token: Option<&str>, role_cookie: Option<&str>) -> SessionClaims {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return SessionClaims::anonymous();
        };

        match &self.decoding_key {
            None => SessionClaims::from_cookies(Some(token.to_string()), role_cookie),
            Some(key) => {
                let validation = Validation::new(Algorithm::HS256);
                match decode::<SessionTokenClaims>(token, key, &validation) {
                    Ok(data) => SessionClaims {
                        token: Some(token.to_string()),
                        role: data.claims.role.as_deref().and_then(Role::parse),
                    },
                    Err(e) => {
                        debug!("Rejecting session token: {}", e);
                        SessionClaims::anonymous()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, role: Option<&str>, expired: bool) -> String {
        let exp = if expired {
            Utc::now() - Duration::hours(1)
        } else {
            Utc::now() + Duration::hours(1)
        };
        let claims = SessionTokenClaims {
            sub: "a@uni.edu".to_string(),
            role: role.map(String::from),
            exp: exp.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_trusting_mode_uses_role_cookie() {
        let verifier = SessionVerifier::trusting();
        let claims = verifier.ingest(Some("opaque"), Some("admin"));
        assert!(claims.authenticated());
        assert_eq!(claims.role, Some(Role::Admin));
    }

    #[test]
    fn test_verifying_mode_ignores_role_cookie() {
        let verifier = SessionVerifier::with_secret("s3cret");
        let tok = token("s3cret", Some("student"), false);
        // A forged admin cookie does not override the signed claim.
        let claims = verifier.ingest(Some(&tok), Some("admin"));
        assert_eq!(claims.role, Some(Role::Student));
    }

    #[test]
    fn test_bad_signature_is_anonymous() {
        let verifier = SessionVerifier::with_secret("s3cret");
        let tok = token("other-secret", Some("admin"), false);
        let claims = verifier.ingest(Some(&tok), Some("admin"));
        assert!(!claims.authenticated());
    }

    #[test]
    fn test_expired_token_is_anonymous() {
        let verifier = SessionVerifier::with_secret("s3cret");
        let tok = token("s3cret", Some("admin"), true);
        assert!(!verifier.ingest(Some(&tok), None).authenticated());
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let verifier = SessionVerifier::with_secret("s3cret");
        assert!(!verifier.ingest(None, Some("admin")).authenticated());
        assert!(!verifier.ingest(Some(""), Some("admin")).authenticated());
    }
}
