// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advisory conflict detection for prospective leave.
//!
//! The detector evaluates a candidate request as if it were approved and
//! annotates it with flags. Flags are decision support only: they never
//! block approval, which stays a human action gated by the checklist.
//!
//! ## Crew thresholds
//!
//! For every date of the candidate:
//! - `available_after < minimum` produces a `below-minimum-crew` (critical)
//! - `available_after == minimum` produces an `at-minimum-crew` (warning)
//!
//! Each tag is emitted at most once, carrying the lowest after-count seen.
//!
//! ## Policy checks
//!
//! Layered on the same pass, never suppressing threshold flags:
//! - `seniority-clash`: another pilot of the same rank has a pending request
//!   overlapping the candidate
//! - `late-request`: the candidate was filed inside the notice period

use crate::availability::{count_on_leave, dates_between};
use crate::error::RosterError;
use crate::policy::RosterPolicy;
use crate::types::{LeaveEvent, RequestId, ensure_ordered};
use serde::{Deserialize, Serialize};
use time::Date;

/// How serious a conflict flag is.
///
/// Ordered so that `Critical` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; no action expected.
    Info,
    /// The reviewer should take a closer look.
    Warning,
    /// Approving would breach policy.
    Critical,
}

impl Severity {
    /// Returns the string representation of this severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reason a conflict flag was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictTag {
    /// Availability would drop below the minimum crew threshold.
    BelowMinimumCrew,
    /// Availability would land exactly on the minimum crew threshold.
    AtMinimumCrew,
    /// Another pilot of the same rank has an overlapping pending request.
    SeniorityClash,
    /// The request was filed inside the notice period.
    LateRequest,
}

impl ConflictTag {
    /// Returns the string representation of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BelowMinimumCrew => "below-minimum-crew",
            Self::AtMinimumCrew => "at-minimum-crew",
            Self::SeniorityClash => "seniority-clash",
            Self::LateRequest => "late-request",
        }
    }
}

impl std::fmt::Display for ConflictTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An advisory annotation on a candidate leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictFlag {
    /// Why the flag was raised.
    pub tag: ConflictTag,
    /// How serious it is.
    pub severity: Severity,
    /// The date the reported counts were observed on.
    pub date: Date,
    /// Available crew of the candidate's rank before approval.
    pub available_before: u32,
    /// Available crew of the candidate's rank with the candidate approved.
    pub available_after: u32,
    /// The minimum crew threshold evaluated against.
    pub threshold: u32,
    /// Number of candidate days that triggered this tag.
    pub affected_days: u32,
    /// The other request involved, for policy flags.
    pub related_request: Option<RequestId>,
}

/// Evaluates candidate leave requests against crew thresholds and policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictDetector {
    minimum_notice_days: Option<u16>,
}

impl ConflictDetector {
    /// Creates a detector. `None` disables the late-request check.
    #[must_use]
    pub const fn new(minimum_notice_days: Option<u16>) -> Self {
        Self {
            minimum_notice_days,
        }
    }

    /// Creates a detector configured from `policy`.
    #[must_use]
    pub const fn from_policy(policy: &RosterPolicy) -> Self {
        Self::new(policy.minimum_notice_days())
    }

    /// Evaluates `candidate` as if it were approved.
    ///
    /// `events` is the current set of leave events; only approved events
    /// reduce availability. If the candidate itself appears in `events` it is
    /// not counted twice.
    ///
    /// Flags are returned most severe first.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidRange` if the candidate ends before it
    /// starts.
    pub fn evaluate(
        &self,
        candidate: &LeaveEvent,
        events: &[LeaveEvent],
        total_headcount: u32,
        minimum_threshold: u32,
    ) -> Result<Vec<ConflictFlag>, RosterError> {
        ensure_ordered(candidate.start_date, candidate.end_date)?;

        // Each slot keeps the flag and the lowest signed after-count seen.
        let mut below: Option<(ConflictFlag, i64)> = None;
        let mut at: Option<(ConflictFlag, i64)> = None;
        let threshold: i64 = i64::from(minimum_threshold);

        for date in dates_between(candidate.start_date, candidate.end_date)? {
            let (before, after) = counts_on(date, candidate, events, total_headcount);

            let (slot, tag, severity) = if after < threshold {
                (&mut below, ConflictTag::BelowMinimumCrew, Severity::Critical)
            } else if after == threshold {
                (&mut at, ConflictTag::AtMinimumCrew, Severity::Warning)
            } else {
                continue;
            };

            match slot {
                Some((flag, worst)) => {
                    flag.affected_days += 1;
                    if after < *worst {
                        *worst = after;
                        flag.date = date;
                        flag.available_before = before;
                        flag.available_after = clamp_count(after);
                    }
                }
                None => {
                    *slot = Some((
                        ConflictFlag {
                            tag,
                            severity,
                            date,
                            available_before: before,
                            available_after: clamp_count(after),
                            threshold: minimum_threshold,
                            affected_days: 1,
                            related_request: None,
                        },
                        after,
                    ));
                }
            }
        }

        let mut flags: Vec<ConflictFlag> = below
            .into_iter()
            .chain(at)
            .map(|(flag, _)| flag)
            .collect();
        flags.extend(seniority_clash(
            candidate,
            events,
            total_headcount,
            minimum_threshold,
        ));
        flags.extend(self.late_request(candidate, events, total_headcount, minimum_threshold));

        flags.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.tag.cmp(&b.tag)));
        Ok(flags)
    }

    /// Flags a candidate filed fewer than `minimum_notice_days` before it
    /// starts.
    fn late_request(
        &self,
        candidate: &LeaveEvent,
        events: &[LeaveEvent],
        total_headcount: u32,
        minimum_threshold: u32,
    ) -> Option<ConflictFlag> {
        let notice: u16 = self.minimum_notice_days?;
        let submitted_on: Date = candidate.submitted_on?;
        let lead_days: i64 = (candidate.start_date - submitted_on).whole_days();
        if lead_days >= i64::from(notice) {
            return None;
        }

        let (before, after) = counts_on(candidate.start_date, candidate, events, total_headcount);
        Some(ConflictFlag {
            tag: ConflictTag::LateRequest,
            severity: Severity::Info,
            date: candidate.start_date,
            available_before: before,
            available_after: clamp_count(after),
            threshold: minimum_threshold,
            affected_days: 0,
            related_request: None,
        })
    }
}

/// Evaluates `candidate` with the crew threshold and seniority checks only.
///
/// # Errors
///
/// Returns `RosterError::InvalidRange` if the candidate ends before it
/// starts.
pub fn evaluate_conflicts(
    candidate: &LeaveEvent,
    events: &[LeaveEvent],
    total_headcount: u32,
    minimum_threshold: u32,
) -> Result<Vec<ConflictFlag>, RosterError> {
    ConflictDetector::default().evaluate(candidate, events, total_headcount, minimum_threshold)
}

/// Returns the most severe flag level, if any flags were raised.
#[must_use]
pub fn highest_severity(flags: &[ConflictFlag]) -> Option<Severity> {
    flags.iter().map(|f| f.severity).max()
}

/// Available counts on `date` before and after approving `candidate`.
///
/// The after count is signed: it is negative when the rank is already fully
/// on leave, so an over-committed day still compares below any threshold.
fn counts_on(
    date: Date,
    candidate: &LeaveEvent,
    events: &[LeaveEvent],
    total_headcount: u32,
) -> (u32, i64) {
    let on_leave: u32 = count_on_leave(date, candidate.rank, events, Some(&candidate.request_id));
    let before: u32 = total_headcount.saturating_sub(on_leave);
    let after: i64 = i64::from(total_headcount) - i64::from(on_leave) - 1;
    (before, after)
}

/// Clamps a signed crew count for reporting.
fn clamp_count(count: i64) -> u32 {
    u32::try_from(count).unwrap_or(0)
}

/// Flags overlapping pending requests from other pilots of the same rank.
///
/// The clash is a warning when the other pilot is more senior (lower
/// seniority number), and informational otherwise or when seniority is
/// unknown. The most senior clashing request is reported.
fn seniority_clash(
    candidate: &LeaveEvent,
    events: &[LeaveEvent],
    total_headcount: u32,
    minimum_threshold: u32,
) -> Option<ConflictFlag> {
    let clashes: Vec<&LeaveEvent> = events
        .iter()
        .filter(|e| {
            e.status.is_pending()
                && e.rank == candidate.rank
                && e.request_id != candidate.request_id
                && e.pilot_id != candidate.pilot_id
                && e.overlaps(candidate)
        })
        .collect();

    let senior: &LeaveEvent = clashes
        .iter()
        .min_by_key(|e| (e.seniority_number.unwrap_or(u32::MAX), e.start_date))
        .copied()?;

    let severity: Severity = match (senior.seniority_number, candidate.seniority_number) {
        (Some(other), Some(own)) if other < own => Severity::Warning,
        _ => Severity::Info,
    };

    let first_overlap: Date = candidate.start_date.max(senior.start_date);
    let last_overlap: Date = candidate.end_date.min(senior.end_date);
    let (before, after) = counts_on(first_overlap, candidate, events, total_headcount);
    let overlap_days: i64 = (last_overlap - first_overlap).whole_days() + 1;

    Some(ConflictFlag {
        tag: ConflictTag::SeniorityClash,
        severity,
        date: first_overlap,
        available_before: before,
        available_after: clamp_count(after),
        threshold: minimum_threshold,
        affected_days: u32::try_from(overlap_days).unwrap_or(0),
        related_request: Some(senior.request_id.clone()),
    })
}
