//! Course-to-block allocation.
//!
//! # Algorithm
//!
//! 1. Keep the first row of each course code. Drop courses with no lecturer
//!    or no valid blocks (recorded as skips).
//! 2. Stable-sort the rest by number of valid blocks, fewest first.
//! 3. For each course, take the first valid block in listed order where its
//!    lecturer is not already teaching. Block names outside the block set
//!    are reported and passed over.
//! 4. A course with no free block stays unassigned. There is no second pass
//!    and no backtracking, so a feasible allocation can be missed.
//!
//! # Complexity
//! O(c log c + c * b) where c=courses, b=valid blocks per course.

use std::collections::HashSet;
use tracing::{debug, info};

use super::ordering::most_constrained_first;
use super::record_skip;
use crate::models::{
    Block, BlockAssignment, BlockSet, Course, Lecturer, LecturerBlockUsage, LecturerDirectory,
    Skip,
};

/// Result of block allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAllocation {
    /// Courses placed per block.
    pub assignment: BlockAssignment,
    /// Skipped courses and ignored block names, in the order they were found.
    pub skipped: Vec<Skip>,
}

impl BlockAllocation {
    /// Codes of courses left without a block.
    pub fn unassigned_courses(&self) -> Vec<&str> {
        self.skipped
            .iter()
            .filter(|s| s.reason.unassigns_course())
            .map(|s| s.course_code.as_str())
            .collect()
    }
}

/// A course that passed validation, with its resolved lecturer.
struct Candidate<'a> {
    course_code: &'a str,
    lecturer_id: &'a str,
    valid_blocks: Vec<Block>,
}

/// Most-constrained-first greedy block allocator.
///
/// # Example
///
/// ```
/// use block_timetable::models::{BlockSet, Course, Lecturer};
/// use block_timetable::scheduler::BlockAllocator;
///
/// let courses = vec![
///     Course::new("C1").with_available(["1A", "1B"]).with_unavailable(["1B"]),
/// ];
/// let lecturers = vec![Lecturer::new("L1", "C1")];
///
/// let allocation = BlockAllocator::new(BlockSet::reference()).allocate(&courses, &lecturers);
/// assert_eq!(allocation.assignment.block_of("C1").unwrap().name(), "1A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockAllocator {
    blocks: BlockSet,
}

impl BlockAllocator {
    /// Creates an allocator over a block set.
    pub fn new(blocks: BlockSet) -> Self {
        Self { blocks }
    }

    /// The block set in use.
    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    /// Allocates courses to blocks starting from empty lecturer usage.
    pub fn allocate(&self, courses: &[Course], lecturers: &[Lecturer]) -> BlockAllocation {
        let mut usage = LecturerBlockUsage::new();
        self.allocate_with(courses, lecturers, &mut usage)
    }

    /// Allocates courses to blocks on top of existing lecturer usage.
    ///
    /// `usage` is updated with every commitment made.
    pub fn allocate_with(
        &self,
        courses: &[Course],
        lecturers: &[Lecturer],
        usage: &mut LecturerBlockUsage,
    ) -> BlockAllocation {
        let directory = LecturerDirectory::new(lecturers);
        let mut skipped = Vec::new();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates = Vec::with_capacity(courses.len());
        for course in courses {
            if !seen.insert(&course.course_code) {
                debug!(course_code = %course.course_code, "duplicate course row ignored");
                continue;
            }
            let Some(lecturer_id) = directory.lecturer_for(&course.course_code) else {
                record_skip(&mut skipped, Skip::missing_lecturer(&course.course_code));
                continue;
            };
            let valid_blocks = course.valid_blocks();
            if valid_blocks.is_empty() {
                record_skip(&mut skipped, Skip::no_valid_blocks(&course.course_code));
                continue;
            }
            candidates.push(Candidate {
                course_code: &course.course_code,
                lecturer_id,
                valid_blocks,
            });
        }

        let counts: Vec<usize> = candidates.iter().map(|c| c.valid_blocks.len()).collect();
        let mut assignment = BlockAssignment::new(&self.blocks);

        for idx in most_constrained_first(&counts) {
            let candidate = &candidates[idx];
            let mut placed = false;
            let mut tried_known_block = false;

            for block in &candidate.valid_blocks {
                if !self.blocks.contains(block.name()) {
                    record_skip(
                        &mut skipped,
                        Skip::invalid_block_name(candidate.course_code, block),
                    );
                    continue;
                }
                tried_known_block = true;
                if usage.is_busy(block, candidate.lecturer_id) {
                    continue;
                }
                assignment.place(block, candidate.course_code, candidate.lecturer_id);
                usage.commit(block, candidate.lecturer_id);
                debug!(
                    course_code = candidate.course_code,
                    lecturer_id = candidate.lecturer_id,
                    block = %block,
                    "course placed"
                );
                placed = true;
                break;
            }

            if !placed {
                let skip = if tried_known_block {
                    Skip::lecturer_block_conflict(candidate.course_code, candidate.lecturer_id)
                } else {
                    Skip::no_valid_blocks(candidate.course_code)
                };
                record_skip(&mut skipped, skip);
            }
        }

        info!(
            courses = courses.len(),
            placed = assignment.placed_count(),
            skipped = skipped.len(),
            "block allocation complete"
        );

        BlockAllocation {
            assignment,
            skipped,
        }
    }
}
