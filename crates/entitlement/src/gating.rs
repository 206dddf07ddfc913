//! Composed content-gating decision.
//!
//! Single entry point for every page-level consumer, so tier comparisons
//! and point-threshold arithmetic are never re-derived at call sites.
//! Axis priority: tier first, then proficiency level; the deny reason
//! names the first failing axis so the caller can pick the right message
//! ("upgrade your plan" vs. "take more assessments").

use parlons_shared::{CefrLevel, SubscriptionTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progression::compute_progress;

/// Requirement attached to a gated resource: a simulation, a live session,
/// a one-on-one booking slot. A missing `min_level` means no proficiency
/// floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequirement {
    pub required_tier: SubscriptionTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<CefrLevel>,
}

/// Primitive user inputs, exactly as supplied by the account service (tier
/// string, free-form) and the aggregation service (point total).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserAccess {
    pub tier: String,
    pub points: f64,
}

/// First failing axis of a denied decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenyReason {
    Tier,
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}

impl AccessDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn deny(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Decide whether a user may consume a piece of gated content.
///
/// A malformed tier string denies on the tier axis; malformed points clamp
/// to zero and can only deny on the level axis. No input shape errors or
/// panics.
pub fn decide(user: &UserAccess, requirement: &ContentRequirement) -> AccessDecision {
    let tier_ok = SubscriptionTier::normalize(&user.tier)
        .map(|tier| tier.satisfies(requirement.required_tier))
        .unwrap_or(false);

    if !tier_ok {
        debug!(
            user_tier = %user.tier,
            required_tier = %requirement.required_tier,
            "Content gate denied on tier"
        );
        return AccessDecision::deny(DenyReason::Tier);
    }

    if let Some(min_level) = requirement.min_level {
        let snapshot = compute_progress(user.points);
        if snapshot.level < min_level {
            debug!(
                level = %snapshot.level,
                min_level = %min_level,
                "Content gate denied on level"
            );
            return AccessDecision::deny(DenyReason::Level);
        }
    }

    AccessDecision::allow()
}
