//! Rank filter: orders scored candidates and keeps the top of the list.

use serde::Serialize;

use crate::recommendation::scoring::ScoredActivity;

/// Fixed shortlist size.
pub const MAX_RECOMMENDATIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedActivity {
    /// 1-based position in the shortlist.
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredActivity,
}

/// Sorts by composite score (highest first), truncates to `limit` and assigns ranks.
///
/// The sort is stable: equal scores keep their incoming (catalog) order.
pub fn rank(mut scored: Vec<ScoredActivity>, limit: usize) -> Vec<RankedActivity> {
    scored.sort_by(|a, b| b.composite_score.cmp(&a.composite_score));

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, scored)| RankedActivity {
            rank: index + 1,
            scored,
        })
        .collect()
}
