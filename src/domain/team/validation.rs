//! Team composition validation
//!
//! All checks run on every call and errors accumulate, so the caller can
//! show the full list instead of one violation at a time. The validator
//! never fails: it always returns a `ValidationResult`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::course::TeamBounds;
use crate::domain::student::StudentId;

use super::draft::TeamDraft;
use super::membership::MembershipIndex;

/// Why a draft was rejected.
///
/// `DifferentCourse` is part of the declared taxonomy but unused by the
/// current checks; it is kept so callers matching on the kind stay
/// exhaustive when cross-course checks land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    EmptyName,
    MinMembers,
    MaxMembers,
    DuplicateMembership,
    AlreadyInTeam,
    DifferentCourse,
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    /// The member this error is about, when it concerns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<StudentId>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            subject_id: None,
        }
    }

    pub fn about(mut self, subject_id: StudentId) -> Self {
        self.subject_id = Some(subject_id);
        self
    }
}

/// Non-blocking advisory attached by the caller's own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    IncompleteTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    pub message: String,
}

/// Outcome of validating a draft. Produced fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Attach a caller-policy warning; does not affect validity.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            kind,
            message: message.into(),
        });
    }
}

/// Validate a draft against the course size bounds and the existing
/// membership map.
pub fn validate_draft(
    draft: &TeamDraft,
    bounds: &TeamBounds,
    membership: &MembershipIndex,
) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Team name is required",
        ));
    }

    let total = draft.total_members();
    if total < bounds.min_team_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::MinMembers,
            format!(
                "Team must have at least {} members, currently {}",
                bounds.min_team_size, total
            ),
        ));
    }
    if total > bounds.max_team_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::MaxMembers,
            format!(
                "Team cannot exceed {} members, currently {}",
                bounds.max_team_size, total
            ),
        ));
    }

    let mut seen = HashSet::new();
    for member in draft.members() {
        if !seen.insert(member) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateMembership,
                    format!("Member '{}' is listed more than once", member),
                )
                .about(member.clone()),
            );
        }
    }

    for member in draft.members() {
        if let Some(team) = membership.team_of(&draft.course_id, member) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::AlreadyInTeam,
                    format!("Member '{}' already belongs to team '{}' in this course", member, team),
                )
                .about(member.clone()),
            );
        }
    }

    ValidationResult::from_errors(errors)
}
