// src/config/mod.rs

//! Program catalog configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file and program course files from disk (`loader.rs`).
//! - Validate the catalog (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_program, parse_courses};
pub use model::{ConfigFile, ConfigSection, ProgramConfig, RawConfigFile};
