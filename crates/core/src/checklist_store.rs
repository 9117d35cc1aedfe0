// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-request approval checklist state.
//!
//! This is the only mutable state in the engine. Each request id owns an
//! independent checklist; toggling one request never touches another.
//!
//! The store lives inside [`ReviewBoard`](crate::ReviewBoard), so the same
//! checklist that reviewers tick is the one `Approve` reads. Applications
//! that share a board between reviewers serialize access to the board.

use crew_roster_domain::{ApprovalChecklistState, ChecklistItem, RequestId};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Checklist state keyed by request id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistStore {
    states: BTreeMap<RequestId, ApprovalChecklistState>,
}

impl ChecklistStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }

    /// Toggles `item` for `request` and returns whether it is now ticked.
    ///
    /// A request with no recorded state starts from an empty checklist.
    pub fn toggle(&mut self, request: &RequestId, item: ChecklistItem) -> bool {
        let state: &mut ApprovalChecklistState = self.states.entry(request.clone()).or_default();
        let checked: bool = state.toggle(item);
        debug!(request = %request, item = %item, checked, "Toggled checklist item");
        if state.is_complete() {
            info!(request = %request, "Approval checklist complete");
        }
        checked
    }

    /// Returns the checklist for `request`, empty if never touched.
    #[must_use]
    pub fn state(&self, request: &RequestId) -> ApprovalChecklistState {
        self.states.get(request).cloned().unwrap_or_default()
    }

    /// Returns whether every checklist item is ticked for `request`.
    #[must_use]
    pub fn is_complete(&self, request: &RequestId) -> bool {
        self.states
            .get(request)
            .is_some_and(ApprovalChecklistState::is_complete)
    }

    /// Clears every ticked item for `request`.
    pub fn reset(&mut self, request: &RequestId) {
        if let Some(state) = self.states.get_mut(request) {
            state.reset();
        }
    }

    /// Drops the checklist for `request` entirely.
    pub fn remove(&mut self, request: &RequestId) -> Option<ApprovalChecklistState> {
        self.states.remove(request)
    }

    /// Number of requests with recorded checklist state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns whether no request has recorded checklist state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
