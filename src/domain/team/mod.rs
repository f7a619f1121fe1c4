//! Team entity, draft and composition validation

mod draft;
mod entity;
mod membership;
mod validation;

pub use draft::TeamDraft;
pub use entity::{Team, TeamId, TeamStatus};
pub use membership::MembershipIndex;
pub use validation::{
    validate_draft, ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning,
    WarningKind,
};
