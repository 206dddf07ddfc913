//! Points-to-CEFR progression math.
//!
//! Point totals come from the backend aggregation service and only drive
//! displays, so malformed input degrades to zero instead of erroring. The
//! level boundary is authoritative; sub-levels are a display subdivision
//! inside it and never promote a learner early.

use parlons_shared::CefrLevel;
use serde::{Deserialize, Serialize};

/// Sub-level subdivisions inside each level.
const SUB_LEVELS: u64 = 3;

/// Synthetic point span above C2. There is no real next threshold at the
/// top of the scale; this keeps the sub-level math defined and makes the
/// ceiling recede as the learner keeps earning points. Open-ended by
/// design.
const TOP_LEVEL_SPAN: u32 = 100;

/// A learner's position on the CEFR scale, derived solely from a
/// cumulative point total. Recomputing from the same total always yields
/// an identical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencySnapshot {
    pub points: u32,
    pub level: CefrLevel,
    /// 1..=3 within the current level.
    pub sub_level: u8,
    /// `None` at the top of the scale.
    pub next: Option<CefrLevel>,
    /// Points remaining to the ceiling. At the top of the scale this is
    /// the synthetic span, reported for display.
    pub points_to_next: u32,
}

/// Derive the CEFR snapshot for a cumulative point total.
///
/// Negative, NaN, or non-finite totals are treated as zero. The current
/// level is the highest whose threshold is at or below the total; exactly
/// on a threshold means sub-level 1, and one point under the next
/// threshold still resolves to sub-level 3.
pub fn compute_progress(points: f64) -> ProficiencySnapshot {
    let points = clamp_points(points);

    let level = CefrLevel::catalog()
        .iter()
        .rev()
        .copied()
        .find(|level| level.points_required() <= points)
        .unwrap_or(CefrLevel::A1);

    let next = level.next();
    let threshold = level.points_required();
    let ceiling = match next {
        Some(next) => next.points_required(),
        None => points.saturating_add(TOP_LEVEL_SPAN),
    };

    let span = u64::from(ceiling - threshold);
    let into = u64::from(points - threshold);
    let sub_level = ((into * SUB_LEVELS / span).min(SUB_LEVELS - 1) + 1) as u8;

    ProficiencySnapshot {
        points,
        level,
        sub_level,
        next,
        points_to_next: ceiling - points,
    }
}

/// Apply the same progression math to each skill's own point total.
/// Skills never share a snapshot; each is derived independently.
pub fn compute_skill_progress<'a>(
    totals: &[(&'a str, f64)],
) -> Vec<(&'a str, ProficiencySnapshot)> {
    totals
        .iter()
        .map(|(skill, points)| (*skill, compute_progress(*points)))
        .collect()
}

fn clamp_points(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(f64::from(u32::MAX)).floor() as u32
    } else {
        0
    }
}
