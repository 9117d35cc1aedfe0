// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, ReviewBoard, apply};
use crew_roster_domain::{
    ChecklistItem, CrewRoster, LeaveEvent, LeaveStatus, Pilot, PilotId, Rank, RequestId,
    RosterPolicy,
};
use time::Date;

pub fn create_test_policy() -> RosterPolicy {
    RosterPolicy::from_json_str(r#"{ "minimum_crew": { "Captain": 10, "First Officer": 8 } }"#)
        .unwrap()
}

/// 14 captains and 10 first officers, seniority in id order.
pub fn create_test_roster() -> CrewRoster {
    let captains = (1..=14).map(|n| {
        Pilot::new(PilotId::new(&format!("CPT{n:02}")), Rank::Captain).with_seniority(n)
    });
    let first_officers = (1..=10).map(|n| {
        Pilot::new(PilotId::new(&format!("FO{n:02}")), Rank::FirstOfficer).with_seniority(100 + n)
    });
    CrewRoster::new(captains.chain(first_officers).collect())
}

pub fn create_request(id: &str, rank: Rank, start: Date, end: Date) -> LeaveEvent {
    LeaveEvent::new(
        RequestId::new(id),
        PilotId::new(&format!("pilot-{id}")),
        rank,
        start,
        end,
    )
    .unwrap()
}

pub fn create_approved(id: &str, rank: Rank, start: Date, end: Date) -> LeaveEvent {
    create_request(id, rank, start, end)
        .with_status(LeaveStatus::Approved)
        .unwrap()
}

/// A board holding one submitted request.
pub fn board_with(event: LeaveEvent) -> ReviewBoard {
    apply(&ReviewBoard::new(), Command::Submit { event })
        .unwrap()
        .new_board
}

/// Ticks every checklist item for `request_id`.
pub fn complete_checklist(board: &ReviewBoard, request_id: &RequestId) -> ReviewBoard {
    ChecklistItem::ALL
        .into_iter()
        .fold(board.clone(), |current, item| {
            apply(
                &current,
                Command::ToggleChecklistItem {
                    request_id: request_id.clone(),
                    item,
                },
            )
            .unwrap()
            .new_board
        })
}
