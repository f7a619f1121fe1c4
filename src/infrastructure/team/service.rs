//! Team service: draft validation and submission against the backend

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::course::{CourseRepository, TeamBounds};
use crate::domain::session::Role;
use crate::domain::team::{
    validate_draft, MembershipIndex, Team, TeamDraft, TeamId, TeamStatus, ValidationResult,
};
use crate::domain::{CourseId, DomainError, StudentId};
use crate::infrastructure::backend::{CreateTeamPayload, TeamRecord, TeamsApi};

/// Orchestrates team drafts: course bounds lookup, membership indexing,
/// validation, and submission through the backend team registry.
#[derive(Debug)]
pub struct TeamService {
    courses: Arc<dyn CourseRepository>,
    teams: Arc<dyn TeamsApi>,
}

impl TeamService {
    pub fn new(courses: Arc<dyn CourseRepository>, teams: Arc<dyn TeamsApi>) -> Self {
        Self { courses, teams }
    }

    /// Team size bounds for a course, or NotFound.
    pub async fn bounds_for(&self, course_id: &CourseId) -> Result<TeamBounds, DomainError> {
        let course = self
            .courses
            .get(course_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Course '{}' not found", course_id)))?;
        Ok(*course.bounds())
    }

    /// Build the membership index from the backend's team listings.
    pub async fn membership_index(&self) -> Result<MembershipIndex, DomainError> {
        let records = self.teams.all_teams().await?;
        let mut index = MembershipIndex::new();

        for record in &records {
            let course_id = CourseId::new(record.course_id.to_string())?;
            for student in &record.students {
                index.assign(
                    course_id.clone(),
                    StudentId::from(student.email.as_str()),
                    record.name_team.clone(),
                );
            }
        }

        debug!(teams = records.len(), "Built membership index");
        Ok(index)
    }

    /// Validate a draft against its course bounds and current memberships.
    ///
    /// Never fails on draft content; only infrastructure problems (unknown
    /// course, unreachable backend) surface as errors.
    pub async fn validate(&self, draft: &TeamDraft) -> Result<ValidationResult, DomainError> {
        let bounds = self.bounds_for(&draft.course_id).await?;
        let membership = self.membership_index().await?;
        Ok(validate_draft(draft, &bounds, &membership))
    }

    /// Validate and, when the draft passes, create the team on the backend.
    ///
    /// Returns the validation result either way; the team is only created
    /// when `is_valid` holds. This re-check backs up the UI's selection-time
    /// guard so an out-of-bounds draft can never reach the backend.
    pub async fn submit(
        &self,
        draft: &TeamDraft,
        payload: &CreateTeamPayload,
    ) -> Result<ValidationResult, DomainError> {
        let result = self.validate(draft).await?;

        if !result.is_valid {
            debug!(
                course = %draft.course_id,
                errors = result.errors.len(),
                "Refusing to submit invalid team draft"
            );
            return Ok(result);
        }

        self.teams.create_team(payload).await?;
        info!(team = %payload.name_team, course = %draft.course_id, "Team created");
        Ok(result)
    }

    /// Whether a requester may dissolve a team: admins always, otherwise
    /// only the creator (the first listed student on the record).
    pub fn can_dissolve(record: &TeamRecord, requester_email: &str, role: Option<Role>) -> bool {
        if role == Some(Role::Admin) {
            return true;
        }
        record
            .students
            .first()
            .is_some_and(|s| s.email == requester_email)
    }

    /// Dissolve a team: close out its lifecycle, then delete the backend
    /// record.
    pub async fn dissolve(&self, record: &TeamRecord) -> Result<(), DomainError> {
        let mut team = Self::team_from_record(record)?;
        team.transition(TeamStatus::Dissolved)?;

        info!(team_id = %team.id(), project_id = team.project_id(), "Dissolving team");
        self.teams.delete_team(team.id().as_str()).await
    }

    /// Rebuild the domain entity from a backend record. The first listed
    /// student is the creator.
    fn team_from_record(record: &TeamRecord) -> Result<Team, DomainError> {
        let creator = record
            .students
            .first()
            .map(|s| StudentId::from(s.email.as_str()))
            .ok_or_else(|| DomainError::validation("Team record has no members"))?;
        let members = record.students[1..]
            .iter()
            .map(|s| StudentId::from(s.email.as_str()))
            .collect();

        Ok(Team::new(
            TeamId::new(record.id_team.to_string())?,
            record.name_team.clone(),
            CourseId::new(record.course_id.to_string())?,
            creator,
            members,
        )
        .with_project(record.project_id))
    }
}
