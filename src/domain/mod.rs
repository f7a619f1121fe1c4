//! Domain layer - Core business logic and entities

pub mod course;
pub mod error;
pub mod guard;
pub mod session;
pub mod student;
pub mod team;

pub use course::{Course, CourseId, CourseRepository, TeamBounds};
pub use error::DomainError;
pub use guard::{evaluate, GuardDecision, GuardTable, RoleGuard, RouteClass};
pub use session::{Role, SessionClaims};
pub use student::{Student, StudentId};
pub use team::{
    validate_draft, MembershipIndex, Team, TeamDraft, TeamId, TeamStatus, ValidationError,
    ValidationErrorKind, ValidationResult, ValidationWarning, WarningKind,
};
