//! Per-run occupancy state.
//!
//! Both accumulators are plain values owned by the caller of a stage, so a
//! stage can be run in isolation and two runs never share state.

use std::collections::{HashMap, HashSet};

use super::Block;

/// `(block, lecturer)` pairs already committed during block allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LecturerBlockUsage {
    committed: HashSet<(Block, String)>,
}

impl LecturerBlockUsage {
    /// Creates empty usage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the lecturer already teaches in the block.
    pub fn is_busy(&self, block: &Block, lecturer_id: &str) -> bool {
        self.committed
            .contains(&(block.clone(), lecturer_id.to_string()))
    }

    /// Commits the lecturer to the block. Returns `false` if already committed.
    pub fn commit(&mut self, block: &Block, lecturer_id: &str) -> bool {
        self.committed
            .insert((block.clone(), lecturer_id.to_string()))
    }

    /// Number of committed pairs.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Whether nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

/// Blocks already occupied by each student during section assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentBlockUsage {
    occupied: HashMap<String, HashSet<Block>>,
}

impl StudentBlockUsage {
    /// Creates empty usage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the student already occupies the block.
    pub fn occupies(&self, student_id: &str, block: &Block) -> bool {
        self.occupied
            .get(student_id)
            .is_some_and(|blocks| blocks.contains(block))
    }

    /// Records the student in the block. Returns `false` if already there.
    pub fn occupy(&mut self, student_id: &str, block: &Block) -> bool {
        self.occupied
            .entry(student_id.to_string())
            .or_default()
            .insert(block.clone())
    }

    /// Number of blocks the student occupies.
    pub fn blocks_of(&self, student_id: &str) -> usize {
        self.occupied.get(student_id).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecturer_usage() {
        let mut u = LecturerBlockUsage::new();
        let a = Block::new("1A");
        assert!(!u.is_busy(&a, "L1"));
        assert!(u.commit(&a, "L1"));
        assert!(u.is_busy(&a, "L1"));
        assert!(!u.is_busy(&a, "L2"));
        assert!(!u.is_busy(&Block::new("1B"), "L1"));
        assert!(!u.commit(&a, "L1"));
        assert_eq!(u.len(), 1);
    }

    #[test]
    fn test_student_usage() {
        let mut u = StudentBlockUsage::new();
        let a = Block::new("1A");
        assert!(!u.occupies("S1", &a));
        assert!(u.occupy("S1", &a));
        assert!(u.occupies("S1", &a));
        assert!(!u.occupies("S2", &a));
        assert!(!u.occupy("S1", &a));
        u.occupy("S1", &Block::new("2B"));
        assert_eq!(u.blocks_of("S1"), 2);
        assert_eq!(u.blocks_of("S9"), 0);
    }
}
