//! Lecturer model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the lecturer roster: a lecturer teaching one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Lecturer identifier.
    pub lecturer_id: String,
    /// Code of the course taught.
    #[serde(alias = "lecture_code")]
    pub course_code: String,
}

impl Lecturer {
    /// Creates a roster row.
    pub fn new(lecturer_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            lecturer_id: lecturer_id.into(),
            course_code: course_code.into(),
        }
    }
}

/// Course → lecturer lookup built from the roster.
///
/// The first roster row teaching a course wins; later rows for the same
/// course are ignored.
#[derive(Debug, Clone, Default)]
pub struct LecturerDirectory<'a> {
    by_course: HashMap<&'a str, &'a str>,
}

impl<'a> LecturerDirectory<'a> {
    /// Indexes a roster.
    pub fn new(lecturers: &'a [Lecturer]) -> Self {
        let mut by_course = HashMap::with_capacity(lecturers.len());
        for l in lecturers {
            by_course
                .entry(l.course_code.as_str())
                .or_insert(l.lecturer_id.as_str());
        }
        Self { by_course }
    }

    /// The lecturer assigned to a course.
    pub fn lecturer_for(&self, course_code: &str) -> Option<&'a str> {
        self.by_course.get(course_code).copied()
    }
}
