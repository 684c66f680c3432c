//! Greedy block timetabling for schools.
//!
//! Places courses into a fixed grid of blocks without double-booking a
//! lecturer, assigns students to course sections without giving anyone two
//! sections in the same block, and evens out rosters of multi-section
//! courses up to their section cap.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Lecturer`, `StudentRequest`,
//!   `Block`, `BlockAssignment`, `Section`, `Schedule`, `Skip`
//! - **`scheduler`**: `BlockAllocator`, `SectionAssigner`, `SectionBalancer`,
//!   the `Timetabler` pipeline and `TimetableSummary`
//! - **`config`**: Block set and section routing
//!
//! # Architecture
//!
//! Input loading, data-quality audits and report rendering live outside this
//! crate. It takes cleaned records and returns plain serde-serializable
//! structures. Nothing in a run fails: records that cannot be placed are
//! skipped and reported with a [`models::SkipReason`].

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;

pub use config::{EngineConfig, SectionRouting};
pub use error::ConfigError;
