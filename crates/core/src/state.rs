// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::checklist_store::ChecklistStore;
use crew_roster_domain::{LeaveEvent, LeaveStatus, RequestId};

/// The requests under review and their approval checklists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewBoard {
    /// Every request on the board, in submission order.
    pub requests: Vec<LeaveEvent>,
    /// Checklist state keyed by request id. This is the store `Approve`
    /// reads; reviewers tick items through `ToggleChecklistItem`.
    pub checklists: ChecklistStore,
}

impl ReviewBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: Vec::new(),
            checklists: ChecklistStore::new(),
        }
    }

    /// Looks up a request by id.
    #[must_use]
    pub fn find(&self, request_id: &RequestId) -> Option<&LeaveEvent> {
        self.requests.iter().find(|e| &e.request_id == request_id)
    }

    /// Returns the requests still awaiting a decision.
    #[must_use]
    pub fn pending(&self) -> Vec<&LeaveEvent> {
        self.requests.iter().filter(|e| e.status.is_pending()).collect()
    }

    /// Replaces the stored copy of `event`.
    pub(crate) fn replace(&mut self, event: LeaveEvent) {
        if let Some(slot) = self
            .requests
            .iter_mut()
            .find(|e| e.request_id == event.request_id)
        {
            *slot = event;
        }
    }
}

/// A record of one applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// The command name.
    pub action: String,
    /// The request affected.
    pub request_id: RequestId,
    /// Status before the command, `None` for a new submission.
    pub from: Option<LeaveStatus>,
    /// Status after the command.
    pub to: LeaveStatus,
    /// Human-readable detail.
    pub details: String,
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The board after the transition.
    pub new_board: ReviewBoard,
    /// What happened.
    pub record: TransitionRecord,
}
