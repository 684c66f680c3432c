//! Student request model.
//!
//! A request asks for a student to be placed in one course. Requests carry
//! a priority kind; lower rank is processed first. Input order is the
//! position of the request in the slice handed to the engine and breaks
//! ties between equal ranks.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Priority class of a student request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PriorityKind {
    /// Rank 1.
    Required,
    /// Rank 2. Also the value of missing or unrecognized kinds.
    #[default]
    Requested,
    /// Rank 3.
    Recommended,
}

impl PriorityKind {
    /// Processing rank (1 = first).
    pub fn rank(self) -> u8 {
        match self {
            PriorityKind::Required => 1,
            PriorityKind::Requested => 2,
            PriorityKind::Recommended => 3,
        }
    }

    /// Parses a kind label. Anything but `Required` or `Recommended` is
    /// `Requested`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Required" => PriorityKind::Required,
            "Recommended" => PriorityKind::Recommended,
            _ => PriorityKind::Requested,
        }
    }
}

impl<'de> Deserialize<'de> for PriorityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.map_or(PriorityKind::Requested, |l| PriorityKind::from_label(&l)))
    }
}

impl fmt::Display for PriorityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriorityKind::Required => "Required",
            PriorityKind::Requested => "Requested",
            PriorityKind::Recommended => "Recommended",
        };
        f.write_str(s)
    }
}

/// A student's request for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRequest {
    /// Student identifier.
    pub student_id: String,
    /// Requested course code.
    pub course_code: String,
    /// Priority kind.
    #[serde(default, alias = "type")]
    pub priority: PriorityKind,
}

impl StudentRequest {
    /// Creates a `Requested`-priority request.
    pub fn new(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            priority: PriorityKind::Requested,
        }
    }

    /// Sets the priority kind.
    pub fn with_priority(mut self, priority: PriorityKind) -> Self {
        self.priority = priority;
        self
    }

    /// Shorthand for a `Required` request.
    pub fn required(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self::new(student_id, course_code).with_priority(PriorityKind::Required)
    }

    /// Shorthand for a `Recommended` request.
    pub fn recommended(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self::new(student_id, course_code).with_priority(PriorityKind::Recommended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks() {
        assert_eq!(PriorityKind::Required.rank(), 1);
        assert_eq!(PriorityKind::Requested.rank(), 2);
        assert_eq!(PriorityKind::Recommended.rank(), 3);
        assert_eq!(PriorityKind::default(), PriorityKind::Requested);
    }

    #[test]
    fn test_missing_type_defaults_to_requested() {
        let r: StudentRequest =
            serde_json::from_str(r#"{"student_id":"S1","course_code":"C1"}"#).unwrap();
        assert_eq!(r.priority, PriorityKind::Requested);
    }

    #[test]
    fn test_type_alias_and_unknown_kind() {
        let r: StudentRequest =
            serde_json::from_str(r#"{"student_id":"S1","course_code":"C1","type":"Required"}"#)
                .unwrap();
        assert_eq!(r.priority, PriorityKind::Required);

        let r: StudentRequest = serde_json::from_str(
            r#"{"student_id":"S1","course_code":"C1","type":"Elective"}"#,
        )
        .unwrap();
        assert_eq!(r.priority, PriorityKind::Requested);

        let r: StudentRequest =
            serde_json::from_str(r#"{"student_id":"S1","course_code":"C1","type":null}"#)
                .unwrap();
        assert_eq!(r.priority, PriorityKind::Requested);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(PriorityKind::from_label("Recommended"), PriorityKind::Recommended);
        assert_eq!(PriorityKind::from_label("required"), PriorityKind::Requested);
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(
            StudentRequest::required("S", "C").priority,
            PriorityKind::Required
        );
        assert_eq!(
            StudentRequest::recommended("S", "C").priority,
            PriorityKind::Recommended
        );
    }
}
