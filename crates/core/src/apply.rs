// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ReviewBoard, TransitionRecord, TransitionResult};
use crew_roster_domain::{
    ApprovalChecklistState, LeaveEvent, LeaveStatus, RequestId, RosterError,
};
use tracing::info;

/// Applies a command to the board, producing a new board and a record.
///
/// The input board is never modified. Conflict flags are advisory and are
/// not consulted here: the only gate on approval is the checklist.
///
/// # Arguments
///
/// * `board` - The current board (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns an error if:
/// - `Submit` names a request already on the board, or one not in
///   `Submitted` status
/// - Any other command names a request not on the board
/// - `Approve` is issued before every checklist item is ticked
/// - The status change is not allowed by the leave lifecycle
pub fn apply(board: &ReviewBoard, command: Command) -> Result<TransitionResult, CoreError> {
    let action: &'static str = command.name();
    match command {
        Command::Submit { event } => {
            if board.find(&event.request_id).is_some() {
                return Err(CoreError::DuplicateRequest(event.request_id));
            }
            if event.status != LeaveStatus::Submitted {
                return Err(CoreError::DomainViolation(
                    RosterError::InvalidStatusTransition {
                        from: event.status,
                        to: LeaveStatus::Submitted,
                    },
                ));
            }

            let details: String = format!(
                "Submitted {} leave for pilot '{}' from {} to {}",
                event.rank, event.pilot_id, event.start_date, event.end_date
            );
            let record: TransitionRecord = TransitionRecord {
                action: action.to_string(),
                request_id: event.request_id.clone(),
                from: None,
                to: LeaveStatus::Submitted,
                details,
            };

            let mut new_board: ReviewBoard = board.clone();
            new_board.requests.push(event);
            info!(request = %record.request_id, "Leave request submitted");

            Ok(TransitionResult { new_board, record })
        }
        Command::ToggleChecklistItem { request_id, item } => {
            let current: &LeaveEvent = find_request(board, &request_id)?;
            let status: LeaveStatus = current.status;

            let mut new_board: ReviewBoard = board.clone();
            let checked: bool = new_board.checklists.toggle(&request_id, item);

            Ok(TransitionResult {
                new_board,
                record: TransitionRecord {
                    action: action.to_string(),
                    request_id,
                    from: Some(status),
                    to: status,
                    details: format!(
                        "{} '{item}'",
                        if checked { "Ticked" } else { "Unticked" }
                    ),
                },
            })
        }
        Command::Approve { request_id } => {
            let current: &LeaveEvent = find_request(board, &request_id)?;
            let checklist: ApprovalChecklistState = board.checklists.state(&request_id);
            if !checklist.is_complete() {
                return Err(CoreError::ChecklistIncomplete {
                    request: request_id,
                    missing: checklist.remaining(),
                });
            }
            transition(board, current, LeaveStatus::Approved, action)
        }
        Command::Deny { request_id } => {
            let current: &LeaveEvent = find_request(board, &request_id)?;
            transition(board, current, LeaveStatus::Denied, action)
        }
        Command::Cancel { request_id } => {
            let current: &LeaveEvent = find_request(board, &request_id)?;
            transition(board, current, LeaveStatus::Cancelled, action)
        }
    }
}

fn find_request<'a>(
    board: &'a ReviewBoard,
    request_id: &RequestId,
) -> Result<&'a LeaveEvent, CoreError> {
    board
        .find(request_id)
        .ok_or_else(|| CoreError::RequestNotFound(request_id.clone()))
}

/// Moves `current` to `status` on a copy of `board`.
fn transition(
    board: &ReviewBoard,
    current: &LeaveEvent,
    status: LeaveStatus,
    action: &str,
) -> Result<TransitionResult, CoreError> {
    let updated: LeaveEvent = current.with_status(status)?;
    let record: TransitionRecord = TransitionRecord {
        action: action.to_string(),
        request_id: current.request_id.clone(),
        from: Some(current.status),
        to: status,
        details: format!(
            "Leave request '{}' moved from {} to {status}",
            current.request_id, current.status
        ),
    };

    let mut new_board: ReviewBoard = board.clone();
    new_board.replace(updated);
    info!(
        request = %record.request_id,
        from = %current.status,
        to = %status,
        "Leave request status changed"
    );

    Ok(TransitionResult { new_board, record })
}
