use thiserror::Error;

use crate::{CefrLevel, SubscriptionTier};

/// Raised by the advisory authoring-form validation when a staff member
/// selects a level or tier outside their role's scope. Decision entry
/// points never return this; they fail closed instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringError {
    #[error("level {0} is outside this role's authoring scope")]
    LevelOutOfScope(CefrLevel),

    #[error("tier {0} is outside this role's authoring scope")]
    TierOutOfScope(SubscriptionTier),
}
