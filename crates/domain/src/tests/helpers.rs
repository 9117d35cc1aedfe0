// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LeaveEvent, LeaveStatus, PilotId, Rank, RequestId, RosterCalendar, RosterPolicy};
use time::Date;

pub fn create_test_calendar() -> RosterCalendar {
    RosterCalendar::new(&RosterPolicy::default()).unwrap()
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

/// Iterates every date in `[start, end]`.
pub fn each_day(start: Date, end: Date) -> impl Iterator<Item = Date> {
    std::iter::successors(Some(start), move |d| d.next_day().filter(|n| *n <= end))
}
