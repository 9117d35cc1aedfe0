// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_roster_domain::{ChecklistItem, RequestId, RosterError};

/// Errors that can occur while reviewing or deciding leave requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(RosterError),
    /// No request with this id is on the board.
    RequestNotFound(RequestId),
    /// A request with this id is already on the board.
    DuplicateRequest(RequestId),
    /// Approval was attempted before every checklist item was ticked.
    ChecklistIncomplete {
        /// The request being approved.
        request: RequestId,
        /// Items still unticked, in checklist order.
        missing: Vec<ChecklistItem>,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RequestNotFound(id) => write!(f, "Leave request '{id}' not found"),
            Self::DuplicateRequest(id) => write!(f, "Leave request '{id}' already exists"),
            Self::ChecklistIncomplete { request, missing } => {
                let names: Vec<&str> = missing.iter().map(ChecklistItem::as_str).collect();
                write!(
                    f,
                    "Cannot approve leave request '{request}': checklist incomplete (missing: {})",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<RosterError> for CoreError {
    fn from(err: RosterError) -> Self {
        Self::DomainViolation(err)
    }
}
