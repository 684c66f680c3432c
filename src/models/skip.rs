//! Skip records.
//!
//! The engine has no failure path: a record that cannot be placed is skipped
//! and a [`Skip`] describing why is recorded. Skips are advisory output for
//! audit reporting and are inspectable by reason.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Block;

/// Classification of a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkipReason {
    /// No lecturer teaches the course.
    MissingLecturer,
    /// The course has no candidate block left.
    NoValidBlocks,
    /// A candidate block is not part of the block set. The course itself
    /// is not skipped by this.
    InvalidBlockName,
    /// Every valid block already holds another course of the same lecturer.
    LecturerBlockConflict,
    /// The requested course was never placed in a block.
    CourseNotScheduled,
    /// The student already holds a section in the course's block.
    StudentBlockConflict,
    /// A course being balanced is missing from the catalog.
    CourseNotFound,
    /// The student fell in the remainder cut off by roster balancing.
    DroppedByBalancing,
}

impl SkipReason {
    /// Whether this reason leaves a course without a block.
    pub fn unassigns_course(self) -> bool {
        matches!(
            self,
            SkipReason::MissingLecturer
                | SkipReason::NoValidBlocks
                | SkipReason::LecturerBlockConflict
        )
    }
}

/// A skipped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
    /// Why the record was skipped.
    pub reason: SkipReason,
    /// Course involved.
    pub course_code: String,
    /// Student involved, for student-level skips.
    pub student_id: Option<String>,
    /// Block involved, when one is.
    pub block: Option<Block>,
    /// Human-readable description.
    pub message: String,
}

impl Skip {
    fn course(
        reason: SkipReason,
        course_code: &str,
        block: Option<&Block>,
        message: String,
    ) -> Self {
        Self {
            reason,
            course_code: course_code.to_string(),
            student_id: None,
            block: block.cloned(),
            message,
        }
    }

    fn student(
        reason: SkipReason,
        student_id: &str,
        course_code: &str,
        block: Option<&Block>,
        message: String,
    ) -> Self {
        Self {
            reason,
            course_code: course_code.to_string(),
            student_id: Some(student_id.to_string()),
            block: block.cloned(),
            message,
        }
    }

    /// No lecturer found for a course.
    pub fn missing_lecturer(course_code: &str) -> Self {
        Self::course(
            SkipReason::MissingLecturer,
            course_code,
            None,
            format!("No lecturer assigned to course {course_code}"),
        )
    }

    /// No valid block left for a course.
    pub fn no_valid_blocks(course_code: &str) -> Self {
        Self::course(
            SkipReason::NoValidBlocks,
            course_code,
            None,
            format!("No valid blocks for course {course_code}"),
        )
    }

    /// A course lists a block outside the block set.
    pub fn invalid_block_name(course_code: &str, block: &Block) -> Self {
        Self::course(
            SkipReason::InvalidBlockName,
            course_code,
            Some(block),
            format!("Invalid block name '{block}' for course {course_code}"),
        )
    }

    /// Every valid block is taken by the course's lecturer.
    pub fn lecturer_block_conflict(course_code: &str, lecturer_id: &str) -> Self {
        Self::course(
            SkipReason::LecturerBlockConflict,
            course_code,
            None,
            format!(
                "Could not assign course {course_code} to any block: lecturer {lecturer_id} is busy in every valid block"
            ),
        )
    }

    /// A student requested a course without a block.
    pub fn course_not_scheduled(student_id: &str, course_code: &str) -> Self {
        Self::student(
            SkipReason::CourseNotScheduled,
            student_id,
            course_code,
            None,
            format!("Course {course_code} not found in block schedule; skipping student {student_id}"),
        )
    }

    /// A student already occupies the course's block.
    pub fn student_block_conflict(student_id: &str, course_code: &str, block: &Block) -> Self {
        Self::student(
            SkipReason::StudentBlockConflict,
            student_id,
            course_code,
            Some(block),
            format!("Student {student_id} already assigned to block {block}; skipping {course_code}"),
        )
    }

    /// A student could not get a section because the course has no lecturer.
    pub fn student_missing_lecturer(student_id: &str, course_code: &str) -> Self {
        Self::student(
            SkipReason::MissingLecturer,
            student_id,
            course_code,
            None,
            format!("No lecturer assigned to course {course_code}; skipping student {student_id}"),
        )
    }

    /// A multi-section course is missing from the catalog at balancing time.
    pub fn course_not_found(course_code: &str) -> Self {
        Self::course(
            SkipReason::CourseNotFound,
            course_code,
            None,
            format!("Course {course_code} not in catalog; sections left unbalanced"),
        )
    }

    /// A student was cut by the balancing remainder.
    pub fn dropped_by_balancing(student_id: &str, course_code: &str) -> Self {
        Self::student(
            SkipReason::DroppedByBalancing,
            student_id,
            course_code,
            None,
            format!("Student {student_id} dropped from {course_code} by section balancing"),
        )
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.reason, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_level_factories() {
        let s = Skip::missing_lecturer("C1");
        assert_eq!(s.reason, SkipReason::MissingLecturer);
        assert_eq!(s.course_code, "C1");
        assert!(s.student_id.is_none());

        let s = Skip::invalid_block_name("C1", &Block::new("9Z"));
        assert_eq!(s.block, Some(Block::new("9Z")));
        assert!(s.message.contains("'9Z'"));
    }

    #[test]
    fn test_student_level_factories() {
        let s = Skip::student_block_conflict("S1", "C2", &Block::new("1A"));
        assert_eq!(s.reason, SkipReason::StudentBlockConflict);
        assert_eq!(s.student_id.as_deref(), Some("S1"));
        assert_eq!(s.block, Some(Block::new("1A")));

        let s = Skip::course_not_scheduled("S2", "C9");
        assert_eq!(s.reason, SkipReason::CourseNotScheduled);
        assert!(s.block.is_none());
    }

    #[test]
    fn test_unassigns_course() {
        assert!(SkipReason::MissingLecturer.unassigns_course());
        assert!(SkipReason::NoValidBlocks.unassigns_course());
        assert!(SkipReason::LecturerBlockConflict.unassigns_course());
        assert!(!SkipReason::InvalidBlockName.unassigns_course());
        assert!(!SkipReason::StudentBlockConflict.unassigns_course());
    }

    #[test]
    fn test_display() {
        let s = Skip::no_valid_blocks("C1");
        assert_eq!(s.to_string(), "[NoValidBlocks] No valid blocks for course C1");
    }
}
