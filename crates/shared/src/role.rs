use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Staff role for content authoring. Declaration order is seniority:
/// authoring scopes widen monotonically from Contributor up to Admin.
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
pub enum StaffRole {
    #[default]
    Contributor,
    Editor,
    Admin,
}

impl StaffRole {
    /// All roles, most junior first.
    pub fn catalog() -> &'static [StaffRole] {
        Self::VARIANTS
    }

    /// Seniority position, 0 = most junior.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Case-insensitive parse; unknown values return `None` so callers can
    /// fall back to the most restrictive scope.
    pub fn normalize(raw: &str) -> Option<StaffRole> {
        raw.trim().parse().ok()
    }
}
