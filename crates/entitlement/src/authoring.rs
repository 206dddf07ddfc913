//! Role-based authoring scopes.
//!
//! Each staff role maps to the set of CEFR levels and tiers it may assign
//! when publishing content. The table is defined once, immutable, and
//! total: every role resolves to a non-empty scope, and scopes widen
//! strictly with seniority. Enforcement here is advisory (form
//! population and client-side rejection); the authoritative check lives
//! server-side.

use parlons_shared::{AuthoringError, CefrLevel, StaffRole, SubscriptionTier};
use serde::Serialize;

/// The levels and tiers a role may assign when publishing content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoringScope {
    pub role: StaffRole,
    pub allowed_levels: Vec<CefrLevel>,
    pub allowed_tiers: Vec<SubscriptionTier>,
}

impl AuthoringScope {
    fn up_to(role: StaffRole, max_level: CefrLevel, max_tier: SubscriptionTier) -> Self {
        Self {
            role,
            allowed_levels: CefrLevel::catalog()
                .iter()
                .copied()
                .filter(|level| *level <= max_level)
                .collect(),
            allowed_tiers: SubscriptionTier::catalog()
                .iter()
                .copied()
                .filter(|tier| *tier <= max_tier)
                .collect(),
        }
    }

    pub fn allows_level(&self, level: CefrLevel) -> bool {
        self.allowed_levels.contains(&level)
    }

    pub fn allows_tier(&self, tier: SubscriptionTier) -> bool {
        self.allowed_tiers.contains(&tier)
    }

    /// Advisory validation of an authoring-form selection. Reports the
    /// first out-of-scope level, then the first out-of-scope tier.
    pub fn validate_selection(
        &self,
        levels: &[CefrLevel],
        tiers: &[SubscriptionTier],
    ) -> Result<(), AuthoringError> {
        if let Some(level) = levels.iter().find(|level| !self.allows_level(**level)) {
            return Err(AuthoringError::LevelOutOfScope(*level));
        }
        if let Some(tier) = tiers.iter().find(|tier| !self.allows_tier(**tier)) {
            return Err(AuthoringError::TierOutOfScope(*tier));
        }
        Ok(())
    }
}

/// Scope table, one entry per role.
pub fn scope_for(role: StaffRole) -> AuthoringScope {
    match role {
        StaffRole::Contributor => {
            AuthoringScope::up_to(role, CefrLevel::B1, SubscriptionTier::Essential)
        }
        StaffRole::Editor => AuthoringScope::up_to(role, CefrLevel::C1, SubscriptionTier::Premium),
        StaffRole::Admin => AuthoringScope::up_to(role, CefrLevel::C2, SubscriptionTier::Pro),
    }
}

/// Scope lookup from a raw role string. Unrecognized roles resolve to the
/// most restrictive scope, never to an empty one.
pub fn scope_for_name(role: &str) -> AuthoringScope {
    scope_for(StaffRole::normalize(role).unwrap_or(StaffRole::Contributor))
}
