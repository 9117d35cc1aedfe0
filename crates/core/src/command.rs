// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_roster_domain::{ChecklistItem, LeaveEvent, RequestId};

/// A command represents reviewer intent as data only.
///
/// Commands are the only way to change the review board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put a newly filed request on the board.
    Submit {
        /// The request, in `Submitted` status.
        event: LeaveEvent,
    },
    /// Tick or untick one checklist item for a request.
    ToggleChecklistItem {
        /// The request the checklist belongs to.
        request_id: RequestId,
        /// The item to toggle.
        item: ChecklistItem,
    },
    /// Approve a request. Requires a complete checklist.
    Approve {
        /// The request to approve.
        request_id: RequestId,
    },
    /// Deny a pending request.
    Deny {
        /// The request to deny.
        request_id: RequestId,
    },
    /// Cancel a pending or approved request.
    Cancel {
        /// The request to cancel.
        request_id: RequestId,
    },
}

impl Command {
    /// Returns the command name used in transition records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "Submit",
            Self::ToggleChecklistItem { .. } => "ToggleChecklistItem",
            Self::Approve { .. } => "Approve",
            Self::Deny { .. } => "Deny",
            Self::Cancel { .. } => "Cancel",
        }
    }
}
