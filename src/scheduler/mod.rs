//! Greedy allocation stages and run metrics.
//!
//! # Stages
//!
//! 1. [`BlockAllocator`]: courses → blocks, most constrained first, no
//!    lecturer teaching twice in one block.
//! 2. [`SectionAssigner`]: students → sections, by priority, no student
//!    holding two sections in one block.
//! 3. [`SectionBalancer`]: spreads multi-section rosters evenly up to the
//!    section cap.
//!
//! [`Timetabler`] runs the three in order. None of the stages backtracks;
//! the result is a fast baseline, not an optimum.
//!
//! # Summary
//!
//! [`TimetableSummary`] computes placement counts, skip counts per reason and
//! capacity overruns from a finished run.

mod balancer;
mod block_allocator;
pub mod ordering;
mod section_assigner;
mod summary;
mod timetabler;

pub use balancer::{BalancedSchedule, SectionBalancer};
pub use block_allocator::{BlockAllocation, BlockAllocator};
pub use section_assigner::{SectionAssignment, SectionAssigner};
pub use summary::TimetableSummary;
pub use timetabler::{TimetableRequest, TimetableResult, Timetabler};

use tracing::warn;

use crate::models::Skip;

/// Logs a skip and appends it to the stage's skip list.
fn record_skip(skipped: &mut Vec<Skip>, skip: Skip) {
    warn!(
        reason = ?skip.reason,
        course_code = %skip.course_code,
        student_id = skip.student_id.as_deref(),
        "{}",
        skip.message
    );
    skipped.push(skip);
}
