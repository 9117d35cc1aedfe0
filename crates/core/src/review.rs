// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reviewer-facing summary of a single leave request.

use crate::error::CoreError;
use crew_roster_domain::{
    AvailabilitySnapshot, ConflictDetector, ConflictFlag, CrewRoster, DateRecommendation,
    LeaveEvent, PeriodSpan, RecommendationEngine, RequestId, RosterCalendar, RosterError,
    RosterPeriod, RosterPeriodId, RosterPolicy, Severity, daily_availability, highest_severity,
    spans_multiple_periods, split_leave_event,
};
use serde::Serialize;
use time::Date;
use tracing::{debug, warn};

/// Everything a reviewer sees for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveReview {
    /// The request reviewed.
    pub request_id: RequestId,
    /// The roster period the request starts in.
    pub period: RosterPeriodId,
    /// One span per roster period the request touches.
    pub spans: Vec<PeriodSpan>,
    /// Whether the request crosses a period boundary.
    pub spans_multiple_periods: bool,
    /// Availability of the request's rank on its first day.
    pub availability: AvailabilitySnapshot,
    /// Days of the request on which approved leave already exceeds the
    /// headcount. Non-empty means the roster headcount is misconfigured.
    pub inconsistent_dates: Vec<Date>,
    /// Advisory flags, most severe first.
    pub flags: Vec<ConflictFlag>,
    /// The most severe flag, if any.
    pub highest_severity: Option<Severity>,
    /// Lower-impact dates within the periods the request touches.
    pub recommendations: Vec<DateRecommendation>,
}

/// Builds the review for `candidate` against the current leave set.
///
/// Headcounts come from `roster`; thresholds, the notice period and the
/// recommendation cap come from `policy`. Nothing in the review blocks
/// approval.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if:
/// - The policy does not yield a valid calendar
/// - The request lies outside the planning horizon
/// - The request ends before it starts
pub fn review_request(
    policy: &RosterPolicy,
    roster: &CrewRoster,
    events: &[LeaveEvent],
    candidate: &LeaveEvent,
) -> Result<LeaveReview, CoreError> {
    let calendar: RosterCalendar = RosterCalendar::new(policy)?;
    let spans: Vec<PeriodSpan> = split_leave_event(&calendar, candidate)?;
    let first_period: RosterPeriod = calendar.period_containing(candidate.start_date)?;
    let last_period: RosterPeriod = calendar.period_containing(candidate.end_date)?;

    debug!(
        request = %candidate.request_id,
        period = %first_period.id(),
        spans = spans.len(),
        "Split leave request into roster periods"
    );

    let headcount: u32 = roster.headcount(candidate.rank);
    let days: Vec<AvailabilitySnapshot> = daily_availability(
        candidate.start_date,
        candidate.end_date,
        candidate.rank,
        events,
        headcount,
    )?;
    let inconsistent_dates: Vec<Date> = days
        .iter()
        .filter(|snapshot| snapshot.is_inconsistent())
        .inspect(|snapshot| {
            warn!(
                date = %snapshot.date,
                rank = %snapshot.rank,
                headcount = snapshot.total_headcount,
                on_leave = snapshot.on_leave,
                "Approved leave exceeds headcount"
            );
        })
        .map(|snapshot| snapshot.date)
        .collect();
    let availability: AvailabilitySnapshot = days
        .first()
        .copied()
        .ok_or(RosterError::InvalidRange {
            start: candidate.start_date,
            end: candidate.end_date,
        })?;

    let threshold: u32 = policy.minimum_crew(candidate.rank);
    let flags: Vec<ConflictFlag> =
        ConflictDetector::from_policy(policy).evaluate(candidate, events, headcount, threshold)?;
    let highest: Option<Severity> = highest_severity(&flags);
    if highest == Some(Severity::Critical) {
        warn!(
            request = %candidate.request_id,
            rank = %candidate.rank,
            threshold,
            "Approving would drop crew below minimum"
        );
    }

    let recommendations: Vec<DateRecommendation> = RecommendationEngine::new(policy.clone())
        .recommend(
            candidate.rank,
            first_period.start_date(),
            last_period.end_date(),
            events,
            headcount,
        )?;

    debug!(
        request = %candidate.request_id,
        flags = flags.len(),
        recommendations = recommendations.len(),
        "Reviewed leave request"
    );

    Ok(LeaveReview {
        request_id: candidate.request_id.clone(),
        period: first_period.id(),
        spans_multiple_periods: spans_multiple_periods(&spans),
        spans,
        availability,
        inconsistent_dates,
        flags,
        highest_severity: highest,
        recommendations,
    })
}
