//! Course model.
//!
//! A course is the unit placed into a block. Its candidate blocks are the
//! listed available blocks minus the listed unavailable ones, in listed order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Block;

/// A course offering from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code.
    pub course_code: String,
    /// Candidate blocks, in preference order.
    #[serde(default)]
    pub available_blocks: Vec<Block>,
    /// Blocks excluded from the candidates.
    #[serde(default)]
    pub unavailable_blocks: Vec<Block>,
    /// Number of sections the course may run (at least 1).
    pub number_of_sections: u32,
    /// Roster cap per section.
    pub maximum_section_size: u32,
}

impl Course {
    /// Creates a single-section course with no candidate blocks and no cap.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            available_blocks: Vec::new(),
            unavailable_blocks: Vec::new(),
            number_of_sections: 1,
            maximum_section_size: u32::MAX,
        }
    }

    /// Sets the available blocks.
    pub fn with_available<I, B>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        self.available_blocks = blocks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the unavailable blocks.
    pub fn with_unavailable<I, B>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        self.unavailable_blocks = blocks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of sections.
    pub fn with_sections(mut self, number_of_sections: u32) -> Self {
        self.number_of_sections = number_of_sections;
        self
    }

    /// Sets the maximum section size.
    pub fn with_max_section_size(mut self, maximum_section_size: u32) -> Self {
        self.maximum_section_size = maximum_section_size;
        self
    }

    /// Available blocks minus unavailable blocks, order preserved.
    ///
    /// Names are not checked against any block set here.
    pub fn valid_blocks(&self) -> Vec<Block> {
        self.available_blocks
            .iter()
            .filter(|b| !self.unavailable_blocks.contains(b))
            .cloned()
            .collect()
    }
}

/// Read-only lookup of courses by code.
///
/// When a code is listed twice, the first row wins.
#[derive(Debug, Clone)]
pub struct CourseCatalog<'a> {
    by_code: HashMap<&'a str, &'a Course>,
}

impl<'a> CourseCatalog<'a> {
    /// Indexes a course list.
    pub fn new(courses: &'a [Course]) -> Self {
        let mut by_code = HashMap::with_capacity(courses.len());
        for course in courses {
            by_code.entry(course.course_code.as_str()).or_insert(course);
        }
        Self { by_code }
    }

    /// Looks up a course.
    pub fn get(&self, course_code: &str) -> Option<&'a Course> {
        self.by_code.get(course_code).copied()
    }

    /// Whether the course is listed.
    pub fn contains(&self, course_code: &str) -> bool {
        self.by_code.contains_key(course_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("MATH10")
            .with_available(["1A", "2B"])
            .with_unavailable(["2B"])
            .with_sections(2)
            .with_max_section_size(28);

        assert_eq!(c.course_code, "MATH10");
        assert_eq!(c.number_of_sections, 2);
        assert_eq!(c.maximum_section_size, 28);
        assert_eq!(c.available_blocks, vec![Block::new("1A"), Block::new("2B")]);
    }

    #[test]
    fn test_valid_blocks_preserves_order() {
        let c = Course::new("C1")
            .with_available(["4B", "1A", "3", "2A"])
            .with_unavailable(["3"]);
        let names: Vec<String> = c.valid_blocks().iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["4B", "1A", "2A"]);
    }

    #[test]
    fn test_valid_blocks_empty_when_all_excluded() {
        let c = Course::new("C1")
            .with_available(["1A"])
            .with_unavailable(["1A", "1B"]);
        assert!(c.valid_blocks().is_empty());
        assert!(Course::new("C2").valid_blocks().is_empty());
    }

    #[test]
    fn test_catalog_first_row_wins() {
        let courses = vec![
            Course::new("C1").with_max_section_size(10),
            Course::new("C1").with_max_section_size(99),
            Course::new("C2"),
        ];
        let catalog = CourseCatalog::new(&courses);
        assert_eq!(catalog.get("C1").map(|c| c.maximum_section_size), Some(10));
        assert!(catalog.contains("C2"));
        assert!(catalog.get("c1").is_none());
    }

    #[test]
    fn test_course_deserialize_defaults() {
        let c: Course = serde_json::from_str(
            r#"{"course_code":"BIO","number_of_sections":1,"maximum_section_size":20}"#,
        )
        .unwrap();
        assert!(c.available_blocks.is_empty());
        assert!(c.unavailable_blocks.is_empty());
    }
}
