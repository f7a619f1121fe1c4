//! Team endpoints of the course backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::http::BackendClient;

/// A student as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRecord {
    pub email: String,
    pub name_user: String,
}

/// A team as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id_team: u64,
    pub name_team: String,
    pub project_id: u64,
    pub project_name: String,
    pub course_id: u64,
    pub students: Vec<TeamMemberRecord>,
}

/// Payload for creating a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamPayload {
    pub name_team: String,
    pub project_id: u64,
    pub project_name: String,
    pub course_id: u64,
    pub students: Vec<TeamMemberRecord>,
}

/// Backend team registry operations.
#[async_trait]
pub trait TeamsApi: Send + Sync + std::fmt::Debug {
    /// Teams a given user belongs to
    async fn user_teams(&self, email: &str) -> Result<Vec<TeamRecord>, DomainError>;

    /// Every team in the system
    async fn all_teams(&self) -> Result<Vec<TeamRecord>, DomainError>;

    /// Create a team
    async fn create_team(&self, payload: &CreateTeamPayload) -> Result<(), DomainError>;

    /// Delete a team by ID
    async fn delete_team(&self, team_id: &str) -> Result<(), DomainError>;
}

/// Real client over the backend `/team` endpoints.
#[derive(Debug, Clone)]
pub struct BackendTeamsClient {
    http: BackendClient,
}

impl BackendTeamsClient {
    pub fn new(http: BackendClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TeamsApi for BackendTeamsClient {
    async fn user_teams(&self, email: &str) -> Result<Vec<TeamRecord>, DomainError> {
        self.http
            .get_json(&format!("/team/user/{}", urlencoding::encode(email)))
            .await
    }

    async fn all_teams(&self) -> Result<Vec<TeamRecord>, DomainError> {
        self.http.get_json("/team/getAllTeam").await
    }

    async fn create_team(&self, payload: &CreateTeamPayload) -> Result<(), DomainError> {
        self.http.post_json_unit("/team/createTeam", payload).await
    }

    async fn delete_team(&self, team_id: &str) -> Result<(), DomainError> {
        self.http
            .delete(&format!("/team/deleteTeam/{}", team_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team_json() -> serde_json::Value {
        serde_json::json!([{
            "idTeam": 7,
            "nameTeam": "Team Alpha",
            "projectId": 2,
            "projectName": "Inventory",
            "courseId": 4,
            "students": [
                {"email": "b@uni.edu", "nameUser": "B"},
                {"email": "c@uni.edu", "nameUser": "C"}
            ]
        }])
    }

    #[tokio::test]
    async fn test_user_teams_deserializes_backend_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/user/b%40uni.edu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(team_json()))
            .mount(&server)
            .await;

        let client = BackendTeamsClient::new(BackendClient::new(server.uri()));
        let teams = client.user_teams("b@uni.edu").await.unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name_team, "Team Alpha");
        assert_eq!(teams[0].course_id, 4);
        assert_eq!(teams[0].students.len(), 2);
    }

    #[tokio::test]
    async fn test_user_teams_encodes_reserved_email_chars() {
        let server = MockServer::start().await;
        // A literal '+' in the path would otherwise read back as a space.
        Mock::given(method("GET"))
            .and(path("/team/user/b%2Btag%40uni.edu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = BackendTeamsClient::new(BackendClient::new(server.uri()));
        let teams = client.user_teams("b+tag@uni.edu").await.unwrap();
        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn test_create_team_posts_camel_case() {
        let server = MockServer::start().await;
        let payload = CreateTeamPayload {
            name_team: "Team Alpha".to_string(),
            project_id: 2,
            project_name: "Inventory".to_string(),
            course_id: 4,
            students: vec![TeamMemberRecord {
                email: "b@uni.edu".to_string(),
                name_user: "B".to_string(),
            }],
        };

        Mock::given(method("POST"))
            .and(path("/team/createTeam"))
            .and(wiremock::matchers::body_json(&payload))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = BackendTeamsClient::new(BackendClient::new(server.uri()));
        client.create_team(&payload).await.unwrap();

        // The wire field names are the backend's camelCase ones.
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("nameTeam").is_some());
        assert!(json.get("courseId").is_some());
    }

    #[tokio::test]
    async fn test_delete_team_propagates_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/team/deleteTeam/7"))
            .respond_with(ResponseTemplate::new(409).set_body_string("team is active"))
            .mount(&server)
            .await;

        let client = BackendTeamsClient::new(BackendClient::new(server.uri()));
        let err = client.delete_team("7").await.unwrap_err();
        assert!(err.to_string().contains("team is active"));
    }
}
