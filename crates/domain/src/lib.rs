// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster period and leave availability engine.
//!
//! Every function in this crate is pure: it takes its full input as
//! arguments and returns new values. Storage, transport, and presentation
//! belong to the surrounding application.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod checklist;
mod conflict;
mod error;
mod period_span;
mod policy;
mod recommendation;
mod roster_period;
mod types;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailabilitySnapshot, PeriodAvailability, availability_by_rank, availability_on,
    daily_availability, period_availability,
};
pub use checklist::{ApprovalChecklistState, ChecklistItem};
pub use conflict::{
    ConflictDetector, ConflictFlag, ConflictTag, Severity, evaluate_conflicts, highest_severity,
};
pub use error::RosterError;
pub use period_span::{
    PeriodSpan, spans_multiple_periods, split_into_periods, split_leave_event, total_days,
};
pub use policy::{PolicyConfig, RosterPolicy};
pub use recommendation::{DateRecommendation, RecommendationEngine, recommend};
pub use roster_period::{RosterCalendar, RosterPeriod, RosterPeriodId};
pub use types::{CrewRoster, LeaveEvent, LeaveStatus, Pilot, PilotId, Rank, RequestId};
