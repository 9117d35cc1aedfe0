// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{board_with, complete_checklist, create_approved, create_request};
use crate::{Command, CoreError, ReviewBoard, TransitionResult, apply};
use crew_roster_domain::{ChecklistItem, LeaveEvent, LeaveStatus, Rank, RequestId, RosterError};
use time::macros::date;

fn request_one() -> LeaveEvent {
    create_request(
        "req-1",
        Rank::Captain,
        date!(2025 - 06 - 10),
        date!(2025 - 06 - 14),
    )
}

#[test]
fn test_submit_adds_request_and_leaves_input_untouched() {
    let board: ReviewBoard = ReviewBoard::new();
    let result: TransitionResult = apply(
        &board,
        Command::Submit {
            event: request_one(),
        },
    )
    .unwrap();

    assert!(board.requests.is_empty());
    assert_eq!(result.new_board.requests.len(), 1);
    assert_eq!(result.record.action, "Submit");
    assert_eq!(result.record.from, None);
    assert_eq!(result.record.to, LeaveStatus::Submitted);
    assert!(result.record.details.contains("pilot-req-1"));
}

#[test]
fn test_duplicate_submit_is_rejected() {
    let board: ReviewBoard = board_with(request_one());
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        Command::Submit {
            event: request_one(),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::DuplicateRequest(RequestId::new("req-1"))
    );
}

#[test]
fn test_submit_rejects_already_decided_request() {
    let event: LeaveEvent = create_approved(
        "old",
        Rank::Captain,
        date!(2025 - 06 - 10),
        date!(2025 - 06 - 10),
    );
    let result: Result<TransitionResult, CoreError> =
        apply(&ReviewBoard::new(), Command::Submit { event });
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            RosterError::InvalidStatusTransition { .. }
        ))
    ));
}

#[test]
fn test_approve_without_checklist_lists_missing_items() {
    let board: ReviewBoard = board_with(request_one());
    let board: ReviewBoard = apply(
        &board,
        Command::ToggleChecklistItem {
            request_id: RequestId::new("req-1"),
            item: ChecklistItem::SeniorityChecked,
        },
    )
    .unwrap()
    .new_board;

    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        Command::Approve {
            request_id: RequestId::new("req-1"),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::ChecklistIncomplete {
            request: RequestId::new("req-1"),
            missing: vec![
                ChecklistItem::CrewCoverageVerified,
                ChecklistItem::NoticePeriodConfirmed,
                ChecklistItem::ExternalSystemEntryCompleted,
            ],
        }
    );
}

#[test]
fn test_approve_with_complete_checklist_succeeds() {
    let id: RequestId = RequestId::new("req-1");
    let board: ReviewBoard = complete_checklist(&board_with(request_one()), &id);

    let result: TransitionResult = apply(
        &board,
        Command::Approve {
            request_id: id.clone(),
        },
    )
    .unwrap();

    assert_eq!(
        result.new_board.find(&id).unwrap().status,
        LeaveStatus::Approved
    );
    assert_eq!(result.record.from, Some(LeaveStatus::Submitted));
    assert_eq!(result.record.to, LeaveStatus::Approved);
    assert!(result.new_board.pending().is_empty());
    // The input board still holds the pending request.
    assert_eq!(board.find(&id).unwrap().status, LeaveStatus::Submitted);
}

#[test]
fn test_approval_is_not_blocked_by_crew_shortage() {
    let id: RequestId = RequestId::new("req-1");
    let mut board: ReviewBoard = board_with(request_one());
    for i in 0..20 {
        board.requests.push(create_approved(
            &format!("busy-{i}"),
            Rank::Captain,
            date!(2025 - 06 - 10),
            date!(2025 - 06 - 14),
        ));
    }
    let board: ReviewBoard = complete_checklist(&board, &id);

    let result: TransitionResult = apply(&board, Command::Approve { request_id: id }).unwrap();
    assert_eq!(result.record.to, LeaveStatus::Approved);
}

#[test]
fn test_unticking_relocks_approval() {
    let id: RequestId = RequestId::new("req-1");
    let board: ReviewBoard = complete_checklist(&board_with(request_one()), &id);
    let board: ReviewBoard = apply(
        &board,
        Command::ToggleChecklistItem {
            request_id: id.clone(),
            item: ChecklistItem::CrewCoverageVerified,
        },
    )
    .unwrap()
    .new_board;

    assert!(matches!(
        apply(&board, Command::Approve { request_id: id }),
        Err(CoreError::ChecklistIncomplete { .. })
    ));
}

#[test]
fn test_checklists_are_independent_per_request() {
    let board: ReviewBoard = board_with(request_one());
    let board: ReviewBoard = apply(
        &board,
        Command::Submit {
            event: create_request(
                "req-2",
                Rank::Captain,
                date!(2025 - 06 - 10),
                date!(2025 - 06 - 12),
            ),
        },
    )
    .unwrap()
    .new_board;

    let board: ReviewBoard = complete_checklist(&board, &RequestId::new("req-1"));
    assert!(board.checklists.is_complete(&RequestId::new("req-1")));
    assert!(!board.checklists.is_complete(&RequestId::new("req-2")));
    assert!(
        apply(
            &board,
            Command::Approve {
                request_id: RequestId::new("req-2")
            }
        )
        .is_err()
    );
}

#[test]
fn test_deny_and_cancel_follow_lifecycle() {
    let id: RequestId = RequestId::new("req-1");
    let board: ReviewBoard = board_with(request_one());

    let denied: TransitionResult = apply(
        &board,
        Command::Deny {
            request_id: id.clone(),
        },
    )
    .unwrap();
    assert_eq!(denied.record.to, LeaveStatus::Denied);

    let result: Result<TransitionResult, CoreError> = apply(
        &denied.new_board,
        Command::Cancel {
            request_id: id.clone(),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(RosterError::InvalidStatusTransition {
            from: LeaveStatus::Denied,
            to: LeaveStatus::Cancelled,
        })
    );

    let approved: ReviewBoard = apply(
        &complete_checklist(&board, &id),
        Command::Approve {
            request_id: id.clone(),
        },
    )
    .unwrap()
    .new_board;
    let cancelled: TransitionResult =
        apply(&approved, Command::Cancel { request_id: id }).unwrap();
    assert_eq!(cancelled.record.from, Some(LeaveStatus::Approved));
    assert_eq!(cancelled.record.to, LeaveStatus::Cancelled);
}

#[test]
fn test_unknown_request_is_reported() {
    let missing: RequestId = RequestId::new("ghost");
    for command in [
        Command::Approve {
            request_id: missing.clone(),
        },
        Command::Deny {
            request_id: missing.clone(),
        },
        Command::Cancel {
            request_id: missing.clone(),
        },
        Command::ToggleChecklistItem {
            request_id: missing.clone(),
            item: ChecklistItem::SeniorityChecked,
        },
    ] {
        assert_eq!(
            apply(&ReviewBoard::new(), command).unwrap_err(),
            CoreError::RequestNotFound(missing.clone())
        );
    }
}
