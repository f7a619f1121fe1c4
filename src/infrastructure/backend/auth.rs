//! Auth endpoints of the course backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::http::BackendClient;

/// Login credentials forwarded to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair issued by the backend on login/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// New account payload, in the backend's user shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub name_user: String,
    pub password: String,
}

/// Confirmation message the backend returns on registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Authenticated user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Backend auth operations.
#[async_trait]
pub trait AuthApi: Send + Sync + std::fmt::Debug {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, DomainError>;
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, DomainError>;
    async fn logout(&self, email: &str) -> Result<(), DomainError>;
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, DomainError>;
    async fn me(&self, access_token: &str) -> Result<UserInfo, DomainError>;
}

/// Real client over the backend `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct BackendAuthClient {
    http: BackendClient,
}

impl BackendAuthClient {
    pub fn new(http: BackendClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthApi for BackendAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, DomainError> {
        self.http.post_json("/auth/login", request).await
    }

    // Registration lives under the backend's user controller, not /auth.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, DomainError> {
        self.http.post_json("/users/createUser", request).await
    }

    async fn logout(&self, email: &str) -> Result<(), DomainError> {
        self.http
            .post_json_unit("/auth/logout", &LogoutRequest { email })
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, DomainError> {
        self.http
            .post_json("/auth/refresh", &RefreshRequest { refresh_token })
            .await
    }

    async fn me(&self, access_token: &str) -> Result<UserInfo, DomainError> {
        self.http.get_json_bearer("/auth/me", access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_round_trip() {
        let server = MockServer::start().await;
        let request = LoginRequest {
            email: "a@uni.edu".to_string(),
            password: "pw".to_string(),
        };

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(&request))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accessToken": "acc",
                "refreshToken": "ref",
                "tokenType": "Bearer",
                "expiresIn": 3600
            })))
            .mount(&server)
            .await;

        let client = BackendAuthClient::new(BackendClient::new(server.uri()));
        let tokens = client.login(&request).await.unwrap();
        assert_eq!(tokens.access_token, "acc");
        assert_eq!(tokens.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_register_posts_backend_user_shape() {
        let server = MockServer::start().await;
        let request = RegisterRequest {
            email: "new@uni.edu".to_string(),
            name_user: "New Student".to_string(),
            password: "pw".to_string(),
        };

        Mock::given(method("POST"))
            .and(path("/users/createUser"))
            .and(body_json(serde_json::json!({
                "email": "new@uni.edu",
                "nameUser": "New Student",
                "password": "pw"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "User created"
            })))
            .mount(&server)
            .await;

        let client = BackendAuthClient::new(BackendClient::new(server.uri()));
        let response = client.register(&request).await.unwrap();
        assert_eq!(response.message, "User created");
    }

    #[tokio::test]
    async fn test_login_failure_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let client = BackendAuthClient::new(BackendClient::new(server.uri()));
        let err = client
            .login(&LoginRequest {
                email: "a@uni.edu".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("401"));
    }
}
