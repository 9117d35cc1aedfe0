// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{LeaveStatus, Rank};
use thiserror::Error;
use time::Date;

/// Errors that can occur while evaluating roster and leave rules.
///
/// Every variant is local and deterministic. The engine surfaces these
/// to the caller instead of substituting a default period or count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The end of a date range precedes its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        /// The range start (inclusive).
        start: Date,
        /// The range end (inclusive).
        end: Date,
    },

    /// A date lies outside the configured planning horizon.
    #[error("Date {date} is outside the planning horizon ({earliest} to {latest})")]
    OutOfRange {
        /// The offending date.
        date: Date,
        /// The first date covered by the roster calendar.
        earliest: Date,
        /// The last date covered by the roster calendar.
        latest: Date,
    },

    /// A policy constant is missing or invalid.
    #[error("Invalid configuration for '{field}': {reason}")]
    Configuration {
        /// The configuration field at fault.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Approved leave exceeds the configured headcount for a rank.
    #[error(
        "Data inconsistency on {date}: {on_leave} {rank} pilots on approved leave but headcount is {headcount}"
    )]
    DataInconsistency {
        /// The date the inconsistency was observed on.
        date: Date,
        /// The rank being evaluated.
        rank: Rank,
        /// The configured headcount.
        headcount: u32,
        /// The number of approved leave events covering the date.
        on_leave: u32,
    },

    /// A roster period label could not be parsed.
    #[error("Invalid roster period label: '{0}'")]
    InvalidPeriodLabel(String),

    /// A roster period number is outside `1..=max`.
    #[error("Invalid roster period number: {number}. Must be between 1 and {max}")]
    InvalidPeriodNumber {
        /// The invalid number.
        number: u8,
        /// The number of periods per roster year.
        max: u8,
    },

    /// A rank string is not one of the known ranks.
    #[error("Invalid rank: '{0}'")]
    InvalidRank(String),

    /// A leave status string is not recognised.
    #[error("Invalid leave status: '{0}'")]
    InvalidLeaveStatus(String),

    /// A checklist item identifier is not part of the approval checklist.
    #[error("Invalid checklist item: '{0}'")]
    InvalidChecklistItem(String),

    /// A leave request cannot move between these two statuses.
    #[error("Cannot transition leave request from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: LeaveStatus,
        /// The requested status.
        to: LeaveStatus,
    },

    /// Date arithmetic overflowed.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl RosterError {
    /// Builds a [`RosterError::Configuration`] for the given field.
    pub(crate) fn configuration(field: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Builds a [`RosterError::DateArithmeticOverflow`].
    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        Self::DateArithmeticOverflow {
            operation: operation.into(),
        }
    }
}
