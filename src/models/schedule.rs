//! Section and schedule models.
//!
//! A section is one taught instance of a course: one block, one lecturer,
//! one roster. The schedule holds sections in creation order so that output
//! is reproducible for identical input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::Block;

/// Identifies a section: course code plus 1-based section index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionKey {
    /// Course code.
    pub course_code: String,
    /// Section number, starting at 1.
    pub section_index: u32,
}

impl SectionKey {
    /// Creates a section key.
    pub fn new(course_code: impl Into<String>, section_index: u32) -> Self {
        Self {
            course_code: course_code.into(),
            section_index,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_Section{}", self.course_code, self.section_index)
    }
}

/// A section with its block, lecturer and roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section key.
    pub key: SectionKey,
    /// Block the course was placed in.
    pub block: Block,
    /// Lecturer teaching the section.
    pub lecturer_id: String,
    /// Student ids, in assignment order.
    pub students: Vec<String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(key: SectionKey, block: Block, lecturer_id: impl Into<String>) -> Self {
        Self {
            key,
            block,
            lecturer_id: lecturer_id.into(),
            students: Vec::new(),
        }
    }

    /// Roster size.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether a student is on the roster.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.iter().any(|s| s == student_id)
    }
}

/// Section key → section, in creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Section>", into = "Vec<Section>")]
pub struct Schedule {
    sections: Vec<Section>,
    index: HashMap<SectionKey, usize>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section, replacing any section with the same key in place.
    pub fn insert(&mut self, section: Section) {
        match self.index.get(&section.key) {
            Some(&i) => self.sections[i] = section,
            None => {
                self.index.insert(section.key.clone(), self.sections.len());
                self.sections.push(section);
            }
        }
    }

    /// Looks up a section.
    pub fn get(&self, key: &SectionKey) -> Option<&Section> {
        self.index.get(key).map(|&i| &self.sections[i])
    }

    /// Looks up a section for mutation.
    pub fn get_mut(&mut self, key: &SectionKey) -> Option<&mut Section> {
        match self.index.get(key) {
            Some(&i) => self.sections.get_mut(i),
            None => None,
        }
    }

    /// Whether a section exists.
    pub fn contains(&self, key: &SectionKey) -> bool {
        self.index.contains_key(key)
    }

    /// Sections in creation order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections of one course, in creation order.
    pub fn sections_for_course<'a>(
        &'a self,
        course_code: &'a str,
    ) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.key.course_code == course_code)
    }

    /// Sections whose roster contains the student.
    pub fn sections_for_student<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.has_student(student_id))
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total roster entries across all sections.
    pub fn enrollment_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Whether the schedule has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Schedule {}

impl From<Vec<Section>> for Schedule {
    fn from(sections: Vec<Section>) -> Self {
        let mut schedule = Schedule::new();
        for s in sections {
            schedule.insert(s);
        }
        schedule
    }
}

impl From<Schedule> for Vec<Section> {
    fn from(schedule: Schedule) -> Self {
        schedule.sections
    }
}
