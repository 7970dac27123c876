// src/dag/mod.rs

//! Curriculum dependency graph and the algorithms over it.
//!
//! - [`course`] holds raw course records and the normalised [`Course`].
//! - [`graph`] builds the id-keyed course arena and derives its edges.
//! - [`classify`] computes Approved / Available / Blocked per course.
//! - [`cascade`] completes and (cascading) un-completes courses.
//! - [`critical_path`] finds the longest chain of enroll prerequisites.
//! - [`diagnostics`] reports dangling references, cycles and dropped records.
//!
//! Everything here is a pure function of its inputs.

pub mod cascade;
pub mod classify;
pub mod course;
pub mod critical_path;
pub mod diagnostics;
pub mod graph;

pub use cascade::{cascade_removals, complete, uncomplete};
pub use classify::{classify, classify_all, classify_in, state_of};
pub use course::{Course, CourseRecord, SkipReason};
pub use critical_path::{CriticalPath, solve};
pub use diagnostics::{DataWarning, diagnose};
pub use graph::{CourseGraph, Edge, SkippedRecord};
