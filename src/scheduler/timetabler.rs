//! End-to-end timetabling pipeline.
//!
//! Runs block allocation, section assignment and section balancing in that
//! order. Each stage reads only the finished output of the one before it.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{BlockAllocator, SectionAssigner, SectionBalancer};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::models::{
    BlockAssignment, Course, Lecturer, Schedule, Skip, SkipReason, StudentRequest,
};

/// Input container for a timetabling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRequest {
    /// Course catalog.
    pub courses: Vec<Course>,
    /// Lecturer roster.
    pub lecturers: Vec<Lecturer>,
    /// Student requests, in input order.
    pub requests: Vec<StudentRequest>,
}

impl TimetableRequest {
    /// Creates a request.
    pub fn new(
        courses: Vec<Course>,
        lecturers: Vec<Lecturer>,
        requests: Vec<StudentRequest>,
    ) -> Self {
        Self {
            courses,
            lecturers,
            requests,
        }
    }
}

/// Output of a timetabling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableResult {
    /// Courses placed per block.
    pub block_assignment: BlockAssignment,
    /// Balanced sections.
    pub schedule: Schedule,
    /// Skips from all stages, in stage then processing order.
    pub skipped: Vec<Skip>,
}

impl TimetableResult {
    /// Skips with the given reason.
    pub fn skips(&self, reason: SkipReason) -> impl Iterator<Item = &Skip> {
        self.skipped.iter().filter(move |s| s.reason == reason)
    }

    /// Codes of courses left without a block.
    pub fn unassigned_courses(&self) -> Vec<&str> {
        self.skipped
            .iter()
            .filter(|s| s.reason.unassigns_course() && s.student_id.is_none())
            .map(|s| s.course_code.as_str())
            .collect()
    }
}

/// Three-stage greedy timetabler.
///
/// # Example
///
/// ```
/// use block_timetable::models::{Course, Lecturer, StudentRequest};
/// use block_timetable::scheduler::{TimetableRequest, Timetabler};
///
/// let request = TimetableRequest::new(
///     vec![Course::new("C1").with_available(["1A"]).with_max_section_size(30)],
///     vec![Lecturer::new("L1", "C1")],
///     vec![StudentRequest::required("S1", "C1")],
/// );
///
/// let result = Timetabler::new().run(&request);
/// assert_eq!(result.block_assignment.placed_count(), 1);
/// assert_eq!(result.schedule.enrollment_count(), 1);
/// assert!(result.skipped.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timetabler {
    config: EngineConfig,
}

impl Timetabler {
    /// Creates a timetabler with the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetabler from a configuration, validating it first.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs all three stages.
    pub fn run(&self, request: &TimetableRequest) -> TimetableResult {
        self.run_parts(&request.courses, &request.lecturers, &request.requests)
    }

    /// Runs all three stages on borrowed input.
    pub fn run_parts(
        &self,
        courses: &[Course],
        lecturers: &[Lecturer],
        requests: &[StudentRequest],
    ) -> TimetableResult {
        let allocation =
            BlockAllocator::new(self.config.blocks.clone()).allocate(courses, lecturers);
        let sections = SectionAssigner::new(self.config.routing).assign(
            &allocation.assignment,
            courses,
            lecturers,
            requests,
        );
        let balanced = SectionBalancer::new().balance(sections.schedule, courses);

        let mut skipped = allocation.skipped;
        skipped.extend(sections.skipped);
        skipped.extend(balanced.skipped);

        info!(
            courses = courses.len(),
            requests = requests.len(),
            sections = balanced.schedule.section_count(),
            skipped = skipped.len(),
            "timetable run complete"
        );

        TimetableResult {
            block_assignment: allocation.assignment,
            schedule: balanced.schedule,
            skipped,
        }
    }
}
