//! Tier-based access resolution.
//!
//! A tier's entitlements include everything below it, so access reduces to
//! a rank comparison. The string entry point is total over arbitrary input:
//! anything the catalog does not recognize denies access rather than
//! erroring.

use parlons_shared::SubscriptionTier;
use tracing::debug;

/// Typed tier comparison: `user` must rank at or above `required`.
pub fn tier_satisfies(user: SubscriptionTier, required: SubscriptionTier) -> bool {
    user.satisfies(required)
}

/// Access check over the raw tier strings supplied by the account service.
///
/// Both sides are normalized (case, whitespace, the top tier's "+" suffix).
/// Any unrecognized value on either side fails closed.
pub fn can_access(user_tier: &str, required_tier: &str) -> bool {
    let allowed = match (
        SubscriptionTier::normalize(user_tier),
        SubscriptionTier::normalize(required_tier),
    ) {
        (Some(user), Some(required)) => user.satisfies(required),
        _ => false,
    };

    debug!(user_tier, required_tier, allowed, "Tier access check");

    allowed
}
