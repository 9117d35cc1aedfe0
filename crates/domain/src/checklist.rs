// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pre-approval checklist for a single leave request.
//!
//! The checklist is a fixed, ordered list of items. A request's state is the
//! set of items a reviewer has ticked; the approve action unlocks only when
//! every item is ticked.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// An item on the pre-approval checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistItem {
    /// Crew coverage for the requested dates has been verified.
    CrewCoverageVerified,
    /// Seniority order against competing requests has been checked.
    SeniorityChecked,
    /// The notice period has been confirmed.
    NoticePeriodConfirmed,
    /// The request has been entered into the external rostering system.
    ExternalSystemEntryCompleted,
}

impl ChecklistItem {
    /// Every checklist item, in display order.
    pub const ALL: [Self; 4] = [
        Self::CrewCoverageVerified,
        Self::SeniorityChecked,
        Self::NoticePeriodConfirmed,
        Self::ExternalSystemEntryCompleted,
    ];

    /// Returns the string identifier of this item.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CrewCoverageVerified => "crew-coverage-verified",
            Self::SeniorityChecked => "seniority-checked",
            Self::NoticePeriodConfirmed => "notice-period-confirmed",
            Self::ExternalSystemEntryCompleted => "external-system-entry-completed",
        }
    }
}

impl FromStr for ChecklistItem {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| RosterError::InvalidChecklistItem(s.to_string()))
    }
}

impl std::fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Completed checklist items for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalChecklistState {
    completed: BTreeSet<ChecklistItem>,
}

impl ApprovalChecklistState {
    /// Creates an empty checklist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            completed: BTreeSet::new(),
        }
    }

    /// Ticks `item` if it is unticked, unticks it otherwise.
    ///
    /// Returns whether the item is ticked afterwards.
    pub fn toggle(&mut self, item: ChecklistItem) -> bool {
        if self.completed.remove(&item) {
            false
        } else {
            self.completed.insert(item);
            true
        }
    }

    /// Returns whether `item` is ticked.
    #[must_use]
    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        self.completed.contains(&item)
    }

    /// Returns whether every checklist item is ticked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == ChecklistItem::ALL.len()
    }

    /// Returns the ticked items in checklist order.
    #[must_use]
    pub fn completed(&self) -> Vec<ChecklistItem> {
        self.completed.iter().copied().collect()
    }

    /// Returns the unticked items in checklist order.
    #[must_use]
    pub fn remaining(&self) -> Vec<ChecklistItem> {
        ChecklistItem::ALL
            .into_iter()
            .filter(|item| !self.completed.contains(item))
            .collect()
    }

    /// Unticks every item.
    pub fn reset(&mut self) {
        self.completed.clear();
    }
}
