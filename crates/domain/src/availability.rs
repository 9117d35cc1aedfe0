// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew availability projection.
//!
//! Availability is derived, never stored: it is recomputed on demand from
//! the current set of leave events. Only approved events of the matching
//! rank that cover the date count as "on leave".

use crate::error::RosterError;
use crate::roster_period::{RosterPeriod, RosterPeriodId};
use crate::types::{CrewRoster, LeaveEvent, Rank, RequestId, ensure_ordered};
use serde::{Deserialize, Serialize};
use time::Date;

/// Crew availability for one rank on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// The date evaluated.
    pub date: Date,
    /// The rank evaluated.
    pub rank: Rank,
    /// Total pilots of this rank.
    pub total_headcount: u32,
    /// Pilots of this rank on approved leave on `date`.
    pub on_leave: u32,
    /// Pilots of this rank available (`total_headcount - on_leave`, never
    /// below zero).
    pub available: u32,
}

impl AvailabilitySnapshot {
    /// Returns whether more pilots are on leave than the headcount allows.
    ///
    /// This indicates a misconfigured headcount upstream.
    #[must_use]
    pub const fn is_inconsistent(&self) -> bool {
        self.on_leave > self.total_headcount
    }

    /// Returns the snapshot, or an error if it is inconsistent.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DataInconsistency` if approved leave exceeds the
    /// headcount.
    pub fn checked(self) -> Result<Self, RosterError> {
        if self.is_inconsistent() {
            return Err(RosterError::DataInconsistency {
                date: self.date,
                rank: self.rank,
                headcount: self.total_headcount,
                on_leave: self.on_leave,
            });
        }
        Ok(self)
    }
}

/// Computes availability for `rank` on `date`.
///
/// The available count is clamped at zero. Callers that must not hide a
/// negative result should call [`AvailabilitySnapshot::checked`].
#[must_use]
pub fn availability_on(
    date: Date,
    rank: Rank,
    events: &[LeaveEvent],
    total_headcount: u32,
) -> AvailabilitySnapshot {
    let on_leave: u32 = count_on_leave(date, rank, events, None);
    AvailabilitySnapshot {
        date,
        rank,
        total_headcount,
        on_leave,
        available: total_headcount.saturating_sub(on_leave),
    }
}

/// Computes availability for every rank on `date`, using headcounts derived
/// from `roster`.
#[must_use]
pub fn availability_by_rank(
    date: Date,
    roster: &CrewRoster,
    events: &[LeaveEvent],
) -> Vec<AvailabilitySnapshot> {
    Rank::ALL
        .iter()
        .map(|rank| availability_on(date, *rank, events, roster.headcount(*rank)))
        .collect()
}

/// Computes availability for `rank` on every day of `[start, end]`.
///
/// # Errors
///
/// Returns `RosterError::InvalidRange` if `end` is before `start`.
pub fn daily_availability(
    start: Date,
    end: Date,
    rank: Rank,
    events: &[LeaveEvent],
    total_headcount: u32,
) -> Result<Vec<AvailabilitySnapshot>, RosterError> {
    ensure_ordered(start, end)?;
    Ok(dates_between(start, end)?
        .into_iter()
        .map(|date| availability_on(date, rank, events, total_headcount))
        .collect())
}

/// Counts approved events of `rank` covering `date`.
///
/// An event whose request id equals `exclude` is ignored, so a candidate
/// already present in the set is not counted twice.
pub(crate) fn count_on_leave(
    date: Date,
    rank: Rank,
    events: &[LeaveEvent],
    exclude: Option<&RequestId>,
) -> u32 {
    let count: usize = events
        .iter()
        .filter(|e| e.is_approved() && e.rank == rank && e.covers(date))
        .filter(|e| exclude != Some(&e.request_id))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Summary of availability across a roster period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAvailability {
    /// The roster period summarised.
    pub period: RosterPeriodId,
    /// The rank summarised.
    pub rank: Rank,
    /// The lowest available count on any day of the period.
    pub minimum_available: u32,
    /// The first date on which `minimum_available` occurs.
    pub tightest_date: Date,
    /// Approved leave days of this rank inside the period.
    pub leave_days: u32,
}

/// Summarises availability for `rank` over every day of `period`.
///
/// # Errors
///
/// Returns `RosterError::DateArithmeticOverflow` if the period end cannot be
/// stepped past.
pub fn period_availability(
    period: &RosterPeriod,
    rank: Rank,
    events: &[LeaveEvent],
    total_headcount: u32,
) -> Result<PeriodAvailability, RosterError> {
    let mut tightest: AvailabilitySnapshot =
        availability_on(period.start_date(), rank, events, total_headcount);
    let mut leave_days: u32 = 0;

    for date in dates_between(period.start_date(), period.end_date())? {
        let snapshot: AvailabilitySnapshot = availability_on(date, rank, events, total_headcount);
        leave_days = leave_days.saturating_add(snapshot.on_leave);
        if snapshot.available < tightest.available {
            tightest = snapshot;
        }
    }

    Ok(PeriodAvailability {
        period: period.id(),
        rank,
        minimum_available: tightest.available,
        tightest_date: tightest.date,
        leave_days,
    })
}

/// Returns every date in `[start, end]`.
pub(crate) fn dates_between(start: Date, end: Date) -> Result<Vec<Date>, RosterError> {
    let mut dates: Vec<Date> = Vec::new();
    let mut current: Date = start;
    while current <= end {
        dates.push(current);
        if current == end {
            break;
        }
        current = current
            .next_day()
            .ok_or_else(|| RosterError::overflow("stepping to the next day"))?;
    }
    Ok(dates)
}
