// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave request review and approval gating.
//!
//! This crate sits between the pure engine in `crew_roster_domain` and the
//! application that stores requests. It produces reviewer summaries, holds
//! the per-request approval checklists, and applies status changes as
//! immutable board transitions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod checklist_store;
mod command;
mod error;
mod review;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use checklist_store::ChecklistStore;
pub use command::Command;
pub use error::CoreError;
pub use review::{LeaveReview, review_request};
pub use state::{ReviewBoard, TransitionRecord, TransitionResult};
