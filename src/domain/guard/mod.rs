//! Route guard - per-request allow/redirect decisions

mod decision;
mod table;

pub use decision::{evaluate, GuardDecision};
pub use table::{GuardTable, RoleGuard, RouteClass};
