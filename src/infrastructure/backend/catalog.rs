//! Project and user listing endpoints of the course backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::http::BackendClient;

/// A project as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub name: String,
}

/// A user as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub name_user: String,
}

#[async_trait]
pub trait ProjectsApi: Send + Sync + std::fmt::Debug {
    async fn all_projects(&self) -> Result<Vec<ProjectRecord>, DomainError>;
}

#[async_trait]
pub trait UsersApi: Send + Sync + std::fmt::Debug {
    async fn all_users(&self) -> Result<Vec<UserRecord>, DomainError>;
}

/// Real client over the backend project/user listing endpoints.
#[derive(Debug, Clone)]
pub struct BackendCatalogClient {
    http: BackendClient,
}

impl BackendCatalogClient {
    pub fn new(http: BackendClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ProjectsApi for BackendCatalogClient {
    async fn all_projects(&self) -> Result<Vec<ProjectRecord>, DomainError> {
        self.http.get_json("/project/getAllProjects").await
    }
}

#[async_trait]
impl UsersApi for BackendCatalogClient {
    async fn all_users(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.http.get_json("/user/getAllUsers").await
    }
}
