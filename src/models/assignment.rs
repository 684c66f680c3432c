//! Block assignment model.
//!
//! The output of block allocation: for each block of the configured set, the
//! courses placed in it together with their lecturer.

use serde::{Deserialize, Serialize};

use super::{Block, BlockSet};

/// A course placed in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCourse {
    /// Course code.
    pub course_code: String,
    /// Lecturer teaching the course.
    pub lecturer_id: String,
}

/// One block and the courses placed in it, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSlot {
    /// The block.
    pub block: Block,
    /// Courses placed in this block.
    pub courses: Vec<PlacedCourse>,
}

/// Block → placed courses.
///
/// Every block of the configured set is present, possibly empty, in
/// configured order. A course appears in at most one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockAssignment {
    slots: Vec<BlockSlot>,
}

impl BlockAssignment {
    /// Creates an assignment with an empty slot per block.
    pub fn new(blocks: &BlockSet) -> Self {
        Self {
            slots: blocks
                .iter()
                .map(|b| BlockSlot {
                    block: b.clone(),
                    courses: Vec::new(),
                })
                .collect(),
        }
    }

    /// Places a course in a block.
    ///
    /// Returns `false` (and places nothing) if the block is not part of
    /// this assignment.
    pub fn place(
        &mut self,
        block: &Block,
        course_code: impl Into<String>,
        lecturer_id: impl Into<String>,
    ) -> bool {
        match self.slots.iter_mut().find(|s| &s.block == block) {
            Some(slot) => {
                slot.courses.push(PlacedCourse {
                    course_code: course_code.into(),
                    lecturer_id: lecturer_id.into(),
                });
                true
            }
            None => false,
        }
    }

    /// Slots in configured order.
    pub fn slots(&self) -> &[BlockSlot] {
        &self.slots
    }

    /// Courses placed in a block (empty if the block is unknown).
    pub fn courses_in(&self, block: &str) -> &[PlacedCourse] {
        self.slots
            .iter()
            .find(|s| s.block.name() == block)
            .map(|s| s.courses.as_slice())
            .unwrap_or(&[])
    }

    /// The block a course was placed in.
    pub fn block_of(&self, course_code: &str) -> Option<&Block> {
        self.slots
            .iter()
            .find(|s| s.courses.iter().any(|c| c.course_code == course_code))
            .map(|s| &s.block)
    }

    /// `(course_code, block)` pairs, in slot then placement order.
    ///
    /// Because a course occupies at most one block, each code appears once.
    pub fn course_blocks(&self) -> impl Iterator<Item = (&str, &Block)> {
        self.slots.iter().flat_map(|s| {
            s.courses
                .iter()
                .map(move |c| (c.course_code.as_str(), &s.block))
        })
    }

    /// Total number of placed courses.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().map(|s| s.courses.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_every_block() {
        let a = BlockAssignment::new(&BlockSet::reference());
        assert_eq!(a.slots().len(), 7);
        assert_eq!(a.placed_count(), 0);
        assert!(a.courses_in("1A").is_empty());
    }

    #[test]
    fn test_place_and_lookup() {
        let mut a = BlockAssignment::new(&BlockSet::new(["1A", "1B"]));
        assert!(a.place(&Block::new("1B"), "C1", "L1"));
        assert!(a.place(&Block::new("1B"), "C2", "L2"));
        assert!(!a.place(&Block::new("9Z"), "C3", "L3"));

        assert_eq!(a.placed_count(), 2);
        assert_eq!(a.block_of("C2"), Some(&Block::new("1B")));
        assert_eq!(a.block_of("C3"), None);
        assert_eq!(a.courses_in("1B")[0].lecturer_id, "L1");

        let pairs: Vec<(&str, &str)> = a.course_blocks().map(|(c, b)| (c, b.name())).collect();
        assert_eq!(pairs, [("C1", "1B"), ("C2", "1B")]);
    }

    #[test]
    fn test_serializes_in_block_order() {
        let mut a = BlockAssignment::new(&BlockSet::new(["2A", "1A"]));
        a.place(&Block::new("1A"), "C1", "L1");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(
            json,
            r#"[{"block":"2A","courses":[]},{"block":"1A","courses":[{"course_code":"C1","lecturer_id":"L1"}]}]"#
        );
    }
}
