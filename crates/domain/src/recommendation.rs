// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Low-impact leave date recommendations.
//!
//! Every date in a window is scored by the availability that would remain if
//! one more pilot of the rank took leave. Only dates that stay strictly above
//! the minimum crew threshold are recommended, largest margin first, ties
//! broken by the earliest date. Recommendations are advisory highlighting;
//! nothing is ever assigned automatically.

use crate::availability::{AvailabilitySnapshot, availability_on, dates_between};
use crate::error::RosterError;
use crate::policy::RosterPolicy;
use crate::types::{LeaveEvent, Rank, ensure_ordered};
use serde::{Deserialize, Serialize};
use time::Date;

/// A recommended leave date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecommendation {
    /// The recommended date.
    pub date: Date,
    /// Available crew before another approval.
    pub available_before: u32,
    /// Available crew after one more approval.
    pub available_after: u32,
    /// How far `available_after` sits above the threshold.
    pub margin: u32,
}

/// Ranks every date in `[window_start, window_end]` for `rank`.
///
/// Dates whose availability after a hypothetical approval would be at or
/// below `minimum_threshold` are excluded.
///
/// # Errors
///
/// Returns `RosterError::InvalidRange` if `window_end` is before
/// `window_start`.
pub fn recommend(
    rank: Rank,
    window_start: Date,
    window_end: Date,
    events: &[LeaveEvent],
    total_headcount: u32,
    minimum_threshold: u32,
) -> Result<Vec<DateRecommendation>, RosterError> {
    ensure_ordered(window_start, window_end)?;

    let mut ranked: Vec<DateRecommendation> = dates_between(window_start, window_end)?
        .into_iter()
        .filter_map(|date| {
            let snapshot: AvailabilitySnapshot =
                availability_on(date, rank, events, total_headcount);
            let after: u32 = snapshot.available.saturating_sub(1);
            (after > minimum_threshold).then(|| DateRecommendation {
                date,
                available_before: snapshot.available,
                available_after: after,
                margin: after - minimum_threshold,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.margin.cmp(&a.margin).then(a.date.cmp(&b.date)));
    Ok(ranked)
}

/// Recommends dates using the thresholds and result cap from a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEngine {
    policy: RosterPolicy,
}

impl RecommendationEngine {
    /// Creates an engine for `policy`.
    #[must_use]
    pub const fn new(policy: RosterPolicy) -> Self {
        Self { policy }
    }

    /// Returns at most `max_recommendations` ranked dates for `rank`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidRange` if `window_end` is before
    /// `window_start`.
    pub fn recommend(
        &self,
        rank: Rank,
        window_start: Date,
        window_end: Date,
        events: &[LeaveEvent],
        total_headcount: u32,
    ) -> Result<Vec<DateRecommendation>, RosterError> {
        let mut ranked: Vec<DateRecommendation> = recommend(
            rank,
            window_start,
            window_end,
            events,
            total_headcount,
            self.policy.minimum_crew(rank),
        )?;
        ranked.truncate(self.policy.max_recommendations());
        Ok(ranked)
    }
}
