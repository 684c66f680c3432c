//! Block model.
//!
//! A block is one named slot of a fixed, closed timetable grid. Courses are
//! placed into exactly one block; a student can attend at most one section
//! per block.
//!
//! Block names are opaque, case-sensitive tokens. `"1a"` and `"1A"` are
//! different blocks, and no trimming is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block names of the reference seven-slot timetable.
pub const REFERENCE_BLOCKS: [&str; 7] = ["1A", "1B", "2A", "2B", "3", "4A", "4B"];

/// A named scheduling slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block(String);

impl Block {
    /// Creates a block from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The block name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Block {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Block {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Block {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The closed, ordered set of blocks a run may use.
///
/// Order is significant: block assignments are reported in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSet {
    blocks: Vec<Block>,
}

impl BlockSet {
    /// Creates a block set from names, in the given order.
    ///
    /// No deduplication happens here; see [`crate::EngineConfig::validate`].
    pub fn new<I, B>(blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        Self {
            blocks: blocks.into_iter().map(Into::into).collect(),
        }
    }

    /// The reference seven-block timetable.
    pub fn reference() -> Self {
        Self::new(REFERENCE_BLOCKS)
    }

    /// Whether `name` is a member of this set.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.iter().any(|b| b.name() == name)
    }

    /// Blocks in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the set has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for BlockSet {
    fn default() -> Self {
        Self::reference()
    }
}
