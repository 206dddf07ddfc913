//! Entitlement and proficiency engine.
//!
//! Answers the two questions every surface of the platform keeps asking:
//! "may this user see/use this content?" and "what is this user's CEFR
//! level, and how far to the next one?". Every entry point is a pure
//! function of its arguments: no I/O, no ambient state, no locking. Callers
//! supply the user's tier string and point total on each invocation; the
//! engine never reads them from anywhere else.

pub mod access;
pub mod authoring;
pub mod gating;
pub mod progression;

pub use access::{can_access, tier_satisfies};
pub use authoring::{AuthoringScope, scope_for, scope_for_name};
pub use gating::{AccessDecision, ContentRequirement, DenyReason, UserAccess, decide};
pub use progression::{ProficiencySnapshot, compute_progress, compute_skill_progress};
