//! Section roster balancing.
//!
//! # Algorithm
//!
//! For every course with more than one section key:
//! 1. Concatenate the section rosters in section creation order.
//! 2. `target = min(total / sections, maximum_section_size)` (floor division).
//! 3. Hand out consecutive runs of `target` students to each section in turn.
//!
//! Students left over after every section received its run are removed from
//! the schedule and reported as [`SkipReason::DroppedByBalancing`]. Courses
//! with a single section are left untouched, so their rosters may still
//! exceed the cap.
//!
//! [`SkipReason::DroppedByBalancing`]: crate::models::SkipReason::DroppedByBalancing

use std::collections::HashMap;
use tracing::{debug, info};

use super::record_skip;
use crate::models::{Course, CourseCatalog, Schedule, SectionKey, Skip};

/// Result of balancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedSchedule {
    /// Final schedule.
    pub schedule: Schedule,
    /// Unbalanced courses and dropped students.
    pub skipped: Vec<Skip>,
}

/// Evenly redistributes multi-section course rosters up to the section cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionBalancer;

impl SectionBalancer {
    /// Creates a balancer.
    pub fn new() -> Self {
        Self
    }

    /// Balances the sections of every multi-section course.
    pub fn balance(&self, mut schedule: Schedule, courses: &[Course]) -> BalancedSchedule {
        let catalog = CourseCatalog::new(courses);
        let mut skipped = Vec::new();
        let mut balanced = 0usize;

        for (course_code, keys) in group_by_course(&schedule) {
            if keys.len() <= 1 {
                continue;
            }
            let Some(course) = catalog.get(&course_code) else {
                record_skip(&mut skipped, Skip::course_not_found(&course_code));
                continue;
            };

            let roster: Vec<String> = keys
                .iter()
                .filter_map(|k| schedule.get(k))
                .flat_map(|s| s.students.iter().cloned())
                .collect();
            let total = roster.len();
            let target = (total / keys.len()).min(course.maximum_section_size as usize);

            let mut cursor = 0;
            for key in &keys {
                let end = (cursor + target).min(total);
                if let Some(section) = schedule.get_mut(key) {
                    section.students = roster[cursor..end].to_vec();
                }
                cursor = end;
                if cursor >= total {
                    break;
                }
            }

            for student_id in &roster[cursor..] {
                record_skip(
                    &mut skipped,
                    Skip::dropped_by_balancing(student_id, &course_code),
                );
            }

            debug!(
                course_code = %course_code,
                sections = keys.len(),
                total,
                target,
                dropped = total - cursor,
                "course balanced"
            );
            balanced += 1;
        }

        info!(
            courses = balanced,
            skipped = skipped.len(),
            "section balancing complete"
        );

        BalancedSchedule { schedule, skipped }
    }
}

/// Section keys grouped by course, both in first-seen order.
fn group_by_course(schedule: &Schedule) -> Vec<(String, Vec<SectionKey>)> {
    let mut groups: Vec<(String, Vec<SectionKey>)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();
    for section in schedule.sections() {
        let code = section.key.course_code.as_str();
        match position.get(code) {
            Some(&i) => groups[i].1.push(section.key.clone()),
            None => {
                position.insert(code, groups.len());
                groups.push((code.to_string(), vec![section.key.clone()]));
            }
        }
    }
    groups
}
