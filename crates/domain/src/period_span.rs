// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decomposition of a date range into roster period spans.
//!
//! A leave request that crosses one or more period boundaries is split into
//! one span per period it touches. The day counts of the spans always sum to
//! the inclusive length of the request.

use crate::error::RosterError;
use crate::roster_period::{RosterCalendar, RosterPeriod, RosterPeriodId};
use crate::types::{LeaveEvent, ensure_ordered};
use serde::{Deserialize, Serialize};
use time::Date;

/// The portion of a date range that falls within a single roster period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpan {
    /// The roster period this span lies in.
    pub period: RosterPeriodId,
    /// First day of the overlap (inclusive).
    pub start_date: Date,
    /// Last day of the overlap (inclusive).
    pub end_date: Date,
    /// Number of days of the range inside the period.
    pub days: u32,
}

/// Splits `[start_date, end_date]` into per-period spans.
///
/// Spans are ordered chronologically and do not overlap. A range inside a
/// single period yields exactly one span equal to the whole range.
///
/// # Errors
///
/// Returns an error if:
/// - `end_date` is before `start_date` (`InvalidRange`)
/// - Either end lies outside the calendar (`OutOfRange`)
pub fn split_into_periods(
    calendar: &RosterCalendar,
    start_date: Date,
    end_date: Date,
) -> Result<Vec<PeriodSpan>, RosterError> {
    ensure_ordered(start_date, end_date)?;

    let first: RosterPeriod = calendar.period_containing(start_date)?;
    let last: RosterPeriod = calendar.period_containing(end_date)?;

    let mut spans: Vec<PeriodSpan> =
        Vec::with_capacity(usize::try_from(last.index() - first.index() + 1).unwrap_or(1));

    for index in first.index()..=last.index() {
        let period: RosterPeriod = calendar.period_at(index)?;
        let overlap_start: Date = start_date.max(period.start_date());
        let overlap_end: Date = end_date.min(period.end_date());
        let days: i64 = (overlap_end - overlap_start).whole_days() + 1;

        spans.push(PeriodSpan {
            period: period.id(),
            start_date: overlap_start,
            end_date: overlap_end,
            days: u32::try_from(days).unwrap_or(0),
        });
    }

    Ok(spans)
}

/// Splits a leave request into per-period spans.
///
/// # Errors
///
/// See [`split_into_periods`].
pub fn split_leave_event(
    calendar: &RosterCalendar,
    event: &LeaveEvent,
) -> Result<Vec<PeriodSpan>, RosterError> {
    split_into_periods(calendar, event.start_date, event.end_date)
}

/// Returns whether a set of spans covers more than one roster period.
#[must_use]
pub fn spans_multiple_periods(spans: &[PeriodSpan]) -> bool {
    spans.len() > 1
}

/// Returns the total number of days across `spans`.
#[must_use]
pub fn total_days(spans: &[PeriodSpan]) -> u32 {
    spans.iter().map(|s| s.days).sum()
}
