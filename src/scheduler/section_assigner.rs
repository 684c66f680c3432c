//! Student-to-section assignment.
//!
//! # Algorithm
//!
//! 1. Map each placed course to its block.
//! 2. Stable-sort requests by priority rank (Required, Requested, Recommended).
//! 3. For each request: skip if the course has no block, or if the student
//!    already holds a section in that block. Otherwise route the student to
//!    a section key, creating the section on first use, and append them.
//!
//! Capacity is not enforced here. Earlier requests are never displaced by
//! later ones.

use std::collections::HashMap;
use tracing::{debug, info};

use super::ordering::priority_order;
use super::record_skip;
use crate::config::SectionRouting;
use crate::models::{
    Block, BlockAssignment, Course, CourseCatalog, Lecturer, LecturerDirectory, Schedule, Section,
    SectionKey, Skip, StudentBlockUsage, StudentRequest,
};

/// Result of section assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAssignment {
    /// Sections in creation order.
    pub schedule: Schedule,
    /// Skipped requests, in processing order.
    pub skipped: Vec<Skip>,
}

/// Greedy, priority-ordered section assigner.
#[derive(Debug, Clone, Default)]
pub struct SectionAssigner {
    routing: SectionRouting,
}

impl SectionAssigner {
    /// Creates an assigner with the given routing.
    pub fn new(routing: SectionRouting) -> Self {
        Self { routing }
    }

    /// Assigns students starting from empty block usage.
    pub fn assign(
        &self,
        assignment: &BlockAssignment,
        courses: &[Course],
        lecturers: &[Lecturer],
        requests: &[StudentRequest],
    ) -> SectionAssignment {
        let mut usage = StudentBlockUsage::new();
        self.assign_with(assignment, courses, lecturers, requests, &mut usage)
    }

    /// Assigns students on top of existing block usage.
    ///
    /// `usage` is updated with every placement.
    pub fn assign_with(
        &self,
        assignment: &BlockAssignment,
        courses: &[Course],
        lecturers: &[Lecturer],
        requests: &[StudentRequest],
        usage: &mut StudentBlockUsage,
    ) -> SectionAssignment {
        let mut course_blocks: HashMap<&str, &Block> = HashMap::new();
        for (course_code, block) in assignment.course_blocks() {
            course_blocks.entry(course_code).or_insert(block);
        }
        let catalog = CourseCatalog::new(courses);
        let directory = LecturerDirectory::new(lecturers);

        let mut schedule = Schedule::new();
        let mut skipped = Vec::new();
        let mut placed_per_course: HashMap<&str, u32> = HashMap::new();

        for idx in priority_order(requests) {
            let request = &requests[idx];
            let student_id = request.student_id.as_str();
            let course_code = request.course_code.as_str();

            let Some(&block) = course_blocks.get(course_code) else {
                record_skip(
                    &mut skipped,
                    Skip::course_not_scheduled(student_id, course_code),
                );
                continue;
            };

            if usage.occupies(student_id, block) {
                record_skip(
                    &mut skipped,
                    Skip::student_block_conflict(student_id, course_code, block),
                );
                continue;
            }

            let placed = placed_per_course.get(course_code).copied().unwrap_or(0);
            let key = self.section_key(course_code, placed, &catalog);

            if !schedule.contains(&key) {
                let Some(lecturer_id) = directory.lecturer_for(course_code) else {
                    record_skip(
                        &mut skipped,
                        Skip::student_missing_lecturer(student_id, course_code),
                    );
                    continue;
                };
                schedule.insert(Section::new(key.clone(), block.clone(), lecturer_id));
            }

            if let Some(section) = schedule.get_mut(&key) {
                section.students.push(student_id.to_string());
            }
            usage.occupy(student_id, block);
            *placed_per_course.entry(course_code).or_insert(0) += 1;

            debug!(
                student_id,
                section = %key,
                block = %block,
                priority = %request.priority,
                "student placed"
            );
        }

        info!(
            requests = requests.len(),
            sections = schedule.section_count(),
            placed = schedule.enrollment_count(),
            skipped = skipped.len(),
            "section assignment complete"
        );

        SectionAssignment { schedule, skipped }
    }

    /// Section key for the next student of a course, given how many of its
    /// students are already placed.
    fn section_key(
        &self,
        course_code: &str,
        placed: u32,
        catalog: &CourseCatalog<'_>,
    ) -> SectionKey {
        let index = match self.routing {
            SectionRouting::SinglePerCourse => 1,
            SectionRouting::RoundRobin => {
                let sections = catalog
                    .get(course_code)
                    .map_or(1, |c| c.number_of_sections.max(1));
                placed % sections + 1
            }
        };
        SectionKey::new(course_code, index)
    }
}
