use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Purchased subscription level.
///
/// The declaration order is the entitlement hierarchy: every tier includes
/// all lower tiers' entitlements, so access checks reduce to a rank
/// comparison.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Essential,
    Premium,
    Pro,
}

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub fn catalog() -> &'static [SubscriptionTier] {
        Self::VARIANTS
    }

    /// Position in the hierarchy, 0 = lowest.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// True when this tier grants at least `required`'s entitlements.
    pub fn satisfies(self, required: SubscriptionTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Parse a tier as received from the account service.
    ///
    /// Case-insensitive; absorbs surrounding whitespace and the "+" suffix
    /// the account service appends to the top tier only. Any other value
    /// not present in the catalog returns `None` so callers fail closed.
    pub fn normalize(raw: &str) -> Option<SubscriptionTier> {
        let trimmed = raw.trim();
        if let Ok(tier) = trimmed.parse() {
            return Some(tier);
        }
        trimmed
            .strip_suffix('+')
            .and_then(|base| base.parse().ok())
            .filter(|tier| *tier == SubscriptionTier::Pro)
    }
}
