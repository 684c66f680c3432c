//! Configuration errors.
//!
//! The allocation stages never fail; they record skips instead. Hard errors
//! are limited to building an [`EngineConfig`](crate::EngineConfig).

use thiserror::Error;

/// Errors raised while loading or validating an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The block set is empty.
    #[error("block set is empty")]
    EmptyBlockSet,

    /// A block name appears more than once.
    #[error("duplicate block name: {0}")]
    DuplicateBlock(String),

    /// A block name is empty or whitespace only.
    #[error("blank block name at position {0}")]
    BlankBlock(usize),

    /// The configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
