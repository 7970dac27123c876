// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::CourseGraph;
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// Checks that at least one program exists, that `default_program` names one
/// of them and that every program has a course file path.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    debug!(programs = config.program.len(), "loaded configuration");
    Ok(config)
}

/// Default config location: `Pathfinder.toml` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Pathfinder.toml")
}

/// Directory that relative paths in the config are resolved against.
///
/// A bare filename like `Pathfinder.toml` has an empty parent, in which case
/// the current working directory is used.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Read and build the course graph of one configured program.
pub fn load_program(cfg: &ConfigFile, root: &Path, key: &str) -> Result<CourseGraph> {
    let program = cfg.program(key)?;
    let path = root.join(&program.courses);
    info!(program = %key, path = ?path, "loading program courses");
    load_courses_file(&path)
}

/// Read a JSON course file.
///
/// IO failures and JSON syntax errors are errors; a well-formed document
/// that is not a list yields an empty graph.
pub fn load_courses_file(path: &Path) -> Result<CourseGraph> {
    let contents = fs::read_to_string(path)?;
    parse_courses(&contents)
}

/// Parse JSON course data. See [`load_courses_file`].
pub fn parse_courses(contents: &str) -> Result<CourseGraph> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    Ok(CourseGraph::from_json_value(&value))
}
