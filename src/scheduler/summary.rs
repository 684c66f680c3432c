//! Run summary metrics.
//!
//! Computes outcome indicators from a finished run and its input.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Courses scheduled | Courses placed in a block |
//! | Courses unassigned | Courses skipped at block allocation |
//! | Placement rate | Roster entries / student requests |
//! | Skips by reason | Count of skips per reason |
//! | Largest section | Longest roster |
//! | Over capacity | Sections whose roster exceeds the course cap |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TimetableResult;
use crate::models::{Course, CourseCatalog, SectionKey, SkipReason, StudentRequest};

/// Outcome indicators of a timetabling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSummary {
    /// Courses placed in a block.
    pub courses_scheduled: usize,
    /// Courses left without a block.
    pub courses_unassigned: usize,
    /// Student requests submitted.
    pub requests_total: usize,
    /// Roster entries in the final schedule.
    pub requests_placed: usize,
    /// `requests_placed / requests_total` (1.0 when there are no requests).
    pub placement_rate: f64,
    /// Skip counts per reason.
    pub skips_by_reason: BTreeMap<SkipReason, usize>,
    /// Number of sections.
    pub section_count: usize,
    /// Longest roster.
    pub largest_section: usize,
    /// Sections whose roster exceeds their course's `maximum_section_size`.
    pub sections_over_capacity: Vec<SectionKey>,
}

impl TimetableSummary {
    /// Computes the summary of a run.
    pub fn calculate(
        result: &TimetableResult,
        courses: &[Course],
        requests: &[StudentRequest],
    ) -> Self {
        let catalog = CourseCatalog::new(courses);

        let mut skips_by_reason = BTreeMap::new();
        for skip in &result.skipped {
            *skips_by_reason.entry(skip.reason).or_insert(0) += 1;
        }

        let sections = result.schedule.sections();
        let sections_over_capacity = sections
            .iter()
            .filter(|s| {
                catalog
                    .get(&s.key.course_code)
                    .is_some_and(|c| s.len() > c.maximum_section_size as usize)
            })
            .map(|s| s.key.clone())
            .collect();

        let requests_placed = result.schedule.enrollment_count();
        let placement_rate = if requests.is_empty() {
            1.0
        } else {
            requests_placed as f64 / requests.len() as f64
        };

        Self {
            courses_scheduled: result.block_assignment.placed_count(),
            courses_unassigned: result.unassigned_courses().len(),
            requests_total: requests.len(),
            requests_placed,
            placement_rate,
            skips_by_reason,
            section_count: sections.len(),
            largest_section: sections.iter().map(|s| s.len()).max().unwrap_or(0),
            sections_over_capacity,
        }
    }

    /// Number of skips with a given reason.
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skips_by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Whether every request was placed and every course scheduled.
    pub fn is_complete(&self) -> bool {
        self.courses_unassigned == 0 && self.requests_placed == self.requests_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lecturer;
    use crate::scheduler::{TimetableRequest, Timetabler};

    fn summarize(request: &TimetableRequest) -> TimetableSummary {
        let result = Timetabler::new().run(request);
        TimetableSummary::calculate(&result, &request.courses, &request.requests)
    }

    #[test]
    fn test_summary_basic() {
        let request = TimetableRequest::new(
            vec![
                Course::new("C1").with_available(["1A"]).with_max_section_size(1),
                Course::new("C2").with_available(["1A"]),
                Course::new("C3"),
            ],
            vec![
                Lecturer::new("L1", "C1"),
                Lecturer::new("L2", "C2"),
                Lecturer::new("L3", "C3"),
            ],
            vec![
                StudentRequest::new("S1", "C1"),
                StudentRequest::new("S2", "C1"),
                StudentRequest::new("S1", "C2"),
                StudentRequest::new("S3", "C3"),
            ],
        );
        let s = summarize(&request);

        assert_eq!(s.courses_scheduled, 2);
        assert_eq!(s.courses_unassigned, 1);
        assert_eq!(s.requests_total, 4);
        assert_eq!(s.requests_placed, 2);
        assert!((s.placement_rate - 0.5).abs() < 1e-10);
        assert_eq!(s.skip_count(SkipReason::NoValidBlocks), 1);
        assert_eq!(s.skip_count(SkipReason::StudentBlockConflict), 1);
        assert_eq!(s.skip_count(SkipReason::CourseNotScheduled), 1);
        assert_eq!(s.skip_count(SkipReason::CourseNotFound), 0);
        assert_eq!(s.section_count, 1);
        assert_eq!(s.largest_section, 2);
        // Single-section courses are not capped.
        assert_eq!(s.sections_over_capacity, vec![SectionKey::new("C1", 1)]);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_summary_empty() {
        let s = summarize(&TimetableRequest::default());
        assert_eq!(s.courses_scheduled, 0);
        assert_eq!(s.requests_total, 0);
        assert!((s.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(s.largest_section, 0);
        assert!(s.skips_by_reason.is_empty());
        assert!(s.is_complete());
    }
}
