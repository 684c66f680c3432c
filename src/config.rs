//! Engine configuration.
//!
//! The block grid is configuration, not data. A run also needs to know how
//! students of a multi-section course are spread over section keys.
//!
//! # Example
//!
//! ```
//! use block_timetable::{EngineConfig, SectionRouting};
//!
//! let config = EngineConfig::from_json(
//!     r#"{ "blocks": ["A", "B", "C"], "routing": "RoundRobin" }"#,
//! )
//! .unwrap();
//! assert_eq!(config.blocks.len(), 3);
//! assert_eq!(config.routing, SectionRouting::RoundRobin);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::models::BlockSet;

/// How placed students are routed to section keys of their course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionRouting {
    /// Every student of a course goes to section 1, whatever the course's
    /// `number_of_sections`.
    #[default]
    SinglePerCourse,
    /// The k-th student placed in a course goes to section
    /// `(k mod number_of_sections) + 1`.
    RoundRobin,
}

/// Configuration shared by all stages of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The closed set of blocks, in reporting order.
    pub blocks: BlockSet,
    /// Section routing used by the section assigner.
    pub routing: SectionRouting,
}

impl EngineConfig {
    /// Reference configuration: seven blocks, one section per course.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block set.
    pub fn with_blocks(mut self, blocks: BlockSet) -> Self {
        self.blocks = blocks;
        self
    }

    /// Sets the section routing.
    pub fn with_routing(mut self, routing: SectionRouting) -> Self {
        self.routing = routing;
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their reference defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the block set is non-empty, has no blank names and no
    /// duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blocks.is_empty() {
            return Err(ConfigError::EmptyBlockSet);
        }
        let mut seen = HashSet::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if block.name().trim().is_empty() {
                return Err(ConfigError::BlankBlock(i));
            }
            if !seen.insert(block.name()) {
                return Err(ConfigError::DuplicateBlock(block.name().to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference() {
        let config = EngineConfig::new();
        assert_eq!(config.blocks, BlockSet::reference());
        assert_eq!(config.routing, SectionRouting::SinglePerCourse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::new());

        let config = EngineConfig::from_json(r#"{"routing":"RoundRobin"}"#).unwrap();
        assert_eq!(config.blocks.len(), 7);
        assert_eq!(config.routing, SectionRouting::RoundRobin);
    }

    #[test]
    fn test_empty_block_set() {
        let err = EngineConfig::from_json(r#"{"blocks":[]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBlockSet));
    }

    #[test]
    fn test_duplicate_block() {
        let config = EngineConfig::new().with_blocks(BlockSet::new(["1A", "1B", "1A"]));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBlock(ref b) if b == "1A"));
        assert_eq!(err.to_string(), "duplicate block name: 1A");
    }

    #[test]
    fn test_blank_block() {
        let config = EngineConfig::new().with_blocks(BlockSet::new(["1A", "  "]));
        assert!(matches!(config.validate(), Err(ConfigError::BlankBlock(1))));
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineConfig::from_json("{ blocks: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_case_distinct_blocks_are_not_duplicates() {
        let config = EngineConfig::new().with_blocks(BlockSet::new(["1a", "1A"]));
        assert!(config.validate().is_ok());
    }
}
