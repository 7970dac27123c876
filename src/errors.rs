// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::CourseId;

#[derive(Error, Debug)]
pub enum PathfinderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Program not found: {0}")]
    ProgramNotFound(String),

    /// The enroll-prerequisite relation is not acyclic.
    ///
    /// `cycle` lists the ids in traversal order; the re-entered id is both the
    /// first and the last element.
    #[error("cycle detected in prerequisite graph: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<CourseId> },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PathfinderError>;
