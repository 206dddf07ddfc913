use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Display locale for level labels. Unknown locales fall back to English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Map a BCP 47-ish language tag ("fr", "fr-CA", ...) to a supported
    /// locale, defaulting to English.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("fr") => Locale::Fr,
            _ => Locale::En,
        }
    }
}

/// CEFR proficiency level, A1 (lowest) through C2 (highest).
///
/// Each level owns a cumulative point threshold: the total a learner must
/// accumulate to enter the level. Thresholds are strictly increasing in
/// declaration order. C2 has no successor.
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
#[strum(ascii_case_insensitive)]
pub enum CefrLevel {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// All levels, lowest first.
    pub fn catalog() -> &'static [CefrLevel] {
        Self::VARIANTS
    }

    /// Position in the scale, 0 = A1.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Cumulative points needed to enter this level.
    pub fn points_required(self) -> u32 {
        match self {
            CefrLevel::A1 => 0,
            CefrLevel::A2 => 100,
            CefrLevel::B1 => 250,
            CefrLevel::B2 => 450,
            CefrLevel::C1 => 700,
            CefrLevel::C2 => 1000,
        }
    }

    /// The level immediately above, or `None` at the top of the scale.
    pub fn next(self) -> Option<CefrLevel> {
        match self {
            CefrLevel::A1 => Some(CefrLevel::A2),
            CefrLevel::A2 => Some(CefrLevel::B1),
            CefrLevel::B1 => Some(CefrLevel::B2),
            CefrLevel::B2 => Some(CefrLevel::C1),
            CefrLevel::C1 => Some(CefrLevel::C2),
            CefrLevel::C2 => None,
        }
    }

    /// Case-insensitive parse; unknown values return `None`.
    pub fn normalize(raw: &str) -> Option<CefrLevel> {
        raw.trim().parse().ok()
    }

    /// Badge color used by progress displays.
    pub fn color(self) -> &'static str {
        match self {
            CefrLevel::A1 => "#9ca3af",
            CefrLevel::A2 => "#22c55e",
            CefrLevel::B1 => "#3b82f6",
            CefrLevel::B2 => "#8b5cf6",
            CefrLevel::C1 => "#f59e0b",
            CefrLevel::C2 => "#ef4444",
        }
    }

    /// Localized display label.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CefrLevel::A1, Locale::En) => "Beginner",
            (CefrLevel::A1, Locale::Fr) => "Débutant",
            (CefrLevel::A2, Locale::En) => "Elementary",
            (CefrLevel::A2, Locale::Fr) => "Élémentaire",
            (CefrLevel::B1, Locale::En) => "Intermediate",
            (CefrLevel::B1, Locale::Fr) => "Intermédiaire",
            (CefrLevel::B2, Locale::En) => "Upper intermediate",
            (CefrLevel::B2, Locale::Fr) => "Intermédiaire avancé",
            (CefrLevel::C1, Locale::En) => "Advanced",
            (CefrLevel::C1, Locale::Fr) => "Avancé",
            (CefrLevel::C2, Locale::En) => "Mastery",
            (CefrLevel::C2, Locale::Fr) => "Maîtrise",
        }
    }
}
