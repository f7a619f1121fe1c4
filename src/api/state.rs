//! Application state for shared services

use std::sync::Arc;

use crate::domain::course::CourseRepository;
use crate::domain::guard::GuardTable;
use crate::infrastructure::auth::SessionVerifier;
use crate::infrastructure::backend::{AuthApi, ProjectsApi, TeamsApi, UsersApi};
use crate::infrastructure::team::TeamService;

/// Application state shared by handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub guard_table: Arc<GuardTable>,
    pub verifier: Arc<SessionVerifier>,
    pub team_service: Arc<TeamService>,
    pub courses: Arc<dyn CourseRepository>,
    pub auth_api: Arc<dyn AuthApi>,
    pub teams_api: Arc<dyn TeamsApi>,
    pub projects_api: Arc<dyn ProjectsApi>,
    pub users_api: Arc<dyn UsersApi>,
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::course::{Course, CourseId, MockCourseRepository, TeamBounds};
    use crate::domain::DomainError;
    use crate::infrastructure::backend::{
        CreateTeamPayload, LoginRequest, ProjectRecord, RegisterRequest, RegisterResponse,
        TeamRecord, TokenResponse, UserInfo, UserRecord,
    };

    #[derive(Debug, Default)]
    pub struct StubBackend {
        pub teams: Vec<TeamRecord>,
        pub users: Vec<UserRecord>,
        pub projects: Vec<ProjectRecord>,
    }

    #[async_trait]
    impl TeamsApi for StubBackend {
        async fn user_teams(&self, email: &str) -> Result<Vec<TeamRecord>, DomainError> {
            Ok(self
                .teams
                .iter()
                .filter(|t| t.students.iter().any(|s| s.email == email))
                .cloned()
                .collect())
        }

        async fn all_teams(&self) -> Result<Vec<TeamRecord>, DomainError> {
            Ok(self.teams.clone())
        }

        async fn create_team(&self, _payload: &CreateTeamPayload) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete_team(&self, _team_id: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UsersApi for StubBackend {
        async fn all_users(&self) -> Result<Vec<UserRecord>, DomainError> {
            Ok(self.users.clone())
        }
    }

    #[async_trait]
    impl ProjectsApi for StubBackend {
        async fn all_projects(&self) -> Result<Vec<ProjectRecord>, DomainError> {
            Ok(self.projects.clone())
        }
    }

    #[async_trait]
    impl AuthApi for StubBackend {
        async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, DomainError> {
            if request.password == "pw" {
                Ok(TokenResponse {
                    access_token: "acc".to_string(),
                    refresh_token: "ref".to_string(),
                    token_type: "Bearer".to_string(),
                    expires_in: 3600,
                })
            } else {
                Err(DomainError::backend("/auth/login", "HTTP 401"))
            }
        }

        async fn register(
            &self,
            request: &RegisterRequest,
        ) -> Result<RegisterResponse, DomainError> {
            if self.users.iter().any(|u| u.email == request.email) {
                Err(DomainError::backend("/users/createUser", "HTTP 409"))
            } else {
                Ok(RegisterResponse {
                    message: "User created".to_string(),
                })
            }
        }

        async fn logout(&self, _email: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, DomainError> {
            if refresh_token == "ref" {
                Ok(TokenResponse {
                    access_token: "acc2".to_string(),
                    refresh_token: "ref2".to_string(),
                    token_type: "Bearer".to_string(),
                    expires_in: 3600,
                })
            } else {
                Err(DomainError::backend("/auth/refresh", "HTTP 401"))
            }
        }

        async fn me(&self, _access_token: &str) -> Result<UserInfo, DomainError> {
            Ok(UserInfo {
                email: "a@uni.edu".to_string(),
                name: "A".to_string(),
                role: "student".to_string(),
            })
        }
    }

    /// State wired to stub services for handler tests.
    pub fn test_state(backend: StubBackend) -> AppState {
        let backend = Arc::new(backend);
        let course = Course::new(
            CourseId::new("4").unwrap(),
            "Ingeniería de Software I",
            4,
            TeamBounds::new(2, 3).unwrap(),
        );
        let courses: Arc<dyn CourseRepository> =
            Arc::new(MockCourseRepository::new().with_course(course));

        AppState {
            guard_table: Arc::new(GuardTable::default()),
            verifier: Arc::new(SessionVerifier::trusting()),
            team_service: Arc::new(TeamService::new(courses.clone(), backend.clone())),
            courses,
            auth_api: backend.clone(),
            teams_api: backend.clone(),
            projects_api: backend.clone(),
            users_api: backend,
        }
    }
}
