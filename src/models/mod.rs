//! Timetabling domain models.
//!
//! Provides the input records (courses, lecturers, student requests), the
//! block grid, and the outputs of each allocation stage.
//!
//! # Stage Outputs
//!
//! | Stage | Output | Accumulator |
//! |-------|--------|-------------|
//! | Block allocation | `BlockAssignment` | `LecturerBlockUsage` |
//! | Section assignment | `Schedule` | `StudentBlockUsage` |
//! | Section balancing | `Schedule` | none |
//!
//! Every stage also reports `Skip` records.

mod assignment;
mod block;
mod course;
mod lecturer;
mod request;
mod schedule;
mod skip;
mod usage;

pub use assignment::{BlockAssignment, BlockSlot, PlacedCourse};
pub use block::{Block, BlockSet, REFERENCE_BLOCKS};
pub use course::{Course, CourseCatalog};
pub use lecturer::{Lecturer, LecturerDirectory};
pub use request::{PriorityKind, StudentRequest};
pub use schedule::{Schedule, Section, SectionKey};
pub use skip::{Skip, SkipReason};
pub use usage::{LecturerBlockUsage, StudentBlockUsage};
