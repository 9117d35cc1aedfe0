// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A pilot rank.
///
/// Ranks are a closed set. Availability and thresholds are always
/// evaluated per rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Pilot in command.
    Captain,
    /// Second in command.
    #[serde(rename = "First Officer")]
    FirstOfficer,
}

impl Rank {
    /// All ranks, in display order.
    pub const ALL: [Self; 2] = [Self::Captain, Self::FirstOfficer];

    /// Returns the display name of this rank.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "Captain",
            Self::FirstOfficer => "First Officer",
        }
    }
}

impl FromStr for Rank {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "captain" | "cpt" => Ok(Self::Captain),
            "first officer" | "first_officer" | "first-officer" | "fo" => Ok(Self::FirstOfficer),
            _ => Err(RosterError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies a pilot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PilotId(String);

impl PilotId {
    /// Creates a new `PilotId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PilotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a leave request.
///
/// Checklist state and status transitions are keyed by this value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Creates a new `RequestId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The lifecycle status of a leave request.
///
/// Requests are never deleted. Status changes are the only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeaveStatus {
    /// Filed and awaiting review.
    #[default]
    Submitted,
    /// Approved by a reviewer. Counts against availability.
    Approved,
    /// Rejected by a reviewer.
    Denied,
    /// Withdrawn by the pilot or rescinded after approval.
    Cancelled,
}

impl LeaveStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Denied => "Denied",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Submitted` → `Approved`
    /// - `Submitted` → `Denied`
    /// - `Submitted` → `Cancelled`
    /// - `Approved` → `Cancelled`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Submitted,
                Self::Approved | Self::Denied | Self::Cancelled
            ) | (Self::Approved, Self::Cancelled)
        )
    }

    /// Returns whether the request is still awaiting a decision.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

impl FromStr for LeaveStatus {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "submitted" | "pending" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(RosterError::InvalidLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pilot on the crew roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// The pilot's identifier.
    pub id: PilotId,
    /// The pilot's rank.
    pub rank: Rank,
    /// Seniority number (1 is most senior), if known.
    pub seniority_number: Option<u32>,
}

impl Pilot {
    /// Creates a new `Pilot` with no seniority number.
    #[must_use]
    pub const fn new(id: PilotId, rank: Rank) -> Self {
        Self {
            id,
            rank,
            seniority_number: None,
        }
    }

    /// Sets the seniority number.
    #[must_use]
    pub const fn with_seniority(mut self, seniority_number: u32) -> Self {
        self.seniority_number = Some(seniority_number);
        self
    }
}

/// The crew roster supplied by the surrounding application.
///
/// Headcount per rank is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRoster {
    pilots: Vec<Pilot>,
}

impl CrewRoster {
    /// Creates a roster from a list of pilots.
    #[must_use]
    pub const fn new(pilots: Vec<Pilot>) -> Self {
        Self { pilots }
    }

    /// Returns all pilots on the roster.
    #[must_use]
    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    /// Returns the number of pilots holding `rank`.
    #[must_use]
    pub fn headcount(&self, rank: Rank) -> u32 {
        let count: usize = self.pilots.iter().filter(|p| p.rank == rank).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Looks up a pilot by identifier.
    #[must_use]
    pub fn find(&self, id: &PilotId) -> Option<&Pilot> {
        self.pilots.iter().find(|p| &p.id == id)
    }
}

/// A leave request for a single pilot over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEvent {
    /// The request identifier.
    pub request_id: RequestId,
    /// The pilot who filed the request.
    pub pilot_id: PilotId,
    /// The pilot's rank at the time of the request.
    pub rank: Rank,
    /// First day of leave (inclusive).
    pub start_date: Date,
    /// Last day of leave (inclusive).
    pub end_date: Date,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// The pilot's seniority number, if known.
    pub seniority_number: Option<u32>,
    /// The date the request was filed, if known.
    pub submitted_on: Option<Date>,
}

impl LeaveEvent {
    /// Creates a newly submitted leave request.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidRange` if `end_date` is before `start_date`.
    pub fn new(
        request_id: RequestId,
        pilot_id: PilotId,
        rank: Rank,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, RosterError> {
        ensure_ordered(start_date, end_date)?;
        Ok(Self {
            request_id,
            pilot_id,
            rank,
            start_date,
            end_date,
            status: LeaveStatus::Submitted,
            seniority_number: None,
            submitted_on: None,
        })
    }

    /// Sets the pilot's seniority number.
    #[must_use]
    pub const fn with_seniority(mut self, seniority_number: u32) -> Self {
        self.seniority_number = Some(seniority_number);
        self
    }

    /// Sets the filing date.
    #[must_use]
    pub const fn with_submitted_on(mut self, submitted_on: Date) -> Self {
        self.submitted_on = Some(submitted_on);
        self
    }

    /// Returns a copy of this request in the given status.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidStatusTransition` if the lifecycle does
    /// not allow moving from the current status to `status`.
    pub fn with_status(&self, status: LeaveStatus) -> Result<Self, RosterError> {
        if !self.status.can_transition_to(status) {
            return Err(RosterError::InvalidStatusTransition {
                from: self.status,
                to: status,
            });
        }
        let mut next: Self = self.clone();
        next.status = status;
        Ok(next)
    }

    /// Returns whether this request has been approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns whether `date` falls within the request (inclusive).
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns whether this request overlaps `other` by at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Returns the inclusive number of days requested.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }
}

/// Validates that `start <= end`.
pub(crate) fn ensure_ordered(start: Date, end: Date) -> Result<(), RosterError> {
    if end < start {
        return Err(RosterError::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn make_event(start: Date, end: Date) -> LeaveEvent {
        LeaveEvent::new(
            RequestId::new("req-1"),
            PilotId::new("P001"),
            Rank::Captain,
            start,
            end,
        )
        .unwrap()
    }

    #[test]
    fn test_rank_round_trips_through_display() {
        for rank in Rank::ALL {
            assert_eq!(rank.to_string().parse::<Rank>().unwrap(), rank);
        }
        assert_eq!("FO".parse::<Rank>().unwrap(), Rank::FirstOfficer);
        assert!(matches!(
            "Purser".parse::<Rank>(),
            Err(RosterError::InvalidRank(_))
        ));
    }

    #[test]
    fn test_leave_status_transitions() {
        assert!(LeaveStatus::Submitted.can_transition_to(LeaveStatus::Approved));
        assert!(LeaveStatus::Submitted.can_transition_to(LeaveStatus::Denied));
        assert!(LeaveStatus::Submitted.can_transition_to(LeaveStatus::Cancelled));
        assert!(LeaveStatus::Approved.can_transition_to(LeaveStatus::Cancelled));
        assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Denied));
        assert!(!LeaveStatus::Denied.can_transition_to(LeaveStatus::Approved));
        assert!(!LeaveStatus::Cancelled.can_transition_to(LeaveStatus::Submitted));
    }

    #[test]
    fn test_leave_event_rejects_inverted_range() {
        let result = LeaveEvent::new(
            RequestId::new("req-1"),
            PilotId::new("P001"),
            Rank::Captain,
            date!(2025 - 03 - 10),
            date!(2025 - 03 - 09),
        );
        assert!(matches!(result, Err(RosterError::InvalidRange { .. })));
    }

    #[test]
    fn test_leave_event_with_status_is_soft_lifecycle() {
        let submitted: LeaveEvent = make_event(date!(2025 - 03 - 01), date!(2025 - 03 - 05));
        let approved: LeaveEvent = submitted.with_status(LeaveStatus::Approved).unwrap();
        assert_eq!(submitted.status, LeaveStatus::Submitted);
        assert!(approved.is_approved());

        let err = approved.with_status(LeaveStatus::Denied).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidStatusTransition {
                from: LeaveStatus::Approved,
                to: LeaveStatus::Denied,
            }
        );
    }

    #[test]
    fn test_leave_event_covers_is_inclusive() {
        let event: LeaveEvent = make_event(date!(2025 - 03 - 01), date!(2025 - 03 - 05));
        assert!(event.covers(date!(2025 - 03 - 01)));
        assert!(event.covers(date!(2025 - 03 - 05)));
        assert!(!event.covers(date!(2025 - 02 - 28)));
        assert!(!event.covers(date!(2025 - 03 - 06)));
        assert_eq!(event.day_count(), 5);
    }

    #[test]
    fn test_roster_headcount_per_rank() {
        let roster: CrewRoster = CrewRoster::new(vec![
            Pilot::new(PilotId::new("P1"), Rank::Captain).with_seniority(1),
            Pilot::new(PilotId::new("P2"), Rank::Captain),
            Pilot::new(PilotId::new("P3"), Rank::FirstOfficer),
        ]);
        assert_eq!(roster.headcount(Rank::Captain), 2);
        assert_eq!(roster.headcount(Rank::FirstOfficer), 1);
        assert_eq!(
            roster.find(&PilotId::new("P1")).unwrap().seniority_number,
            Some(1)
        );
        assert!(roster.find(&PilotId::new("P9")).is_none());
    }
}
