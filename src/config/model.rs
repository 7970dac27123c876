// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{PathfinderError, Result};
use crate::types::{ProgressStorageMode, ViewMode};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// default_program = "tup"
/// default_view = "all"
///
/// [program.tup]
/// label = "TUP - Programación"
/// courses = "data/tup.json"
/// ```
///
/// Deserialized as-is; [`ConfigFile`] is the validated form.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All programs from `[program.<key>]`, keyed by program key.
    #[serde(default)]
    pub program: BTreeMap<String, ProgramConfig>,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub program: BTreeMap<String, ProgramConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        program: BTreeMap<String, ProgramConfig>,
    ) -> Self {
        Self { config, program }
    }

    /// `default_program` if set, else the first program by key.
    pub fn default_program_key(&self) -> Option<&str> {
        self.config
            .default_program
            .as_deref()
            .or_else(|| self.program.keys().next().map(|k| k.as_str()))
    }

    pub fn program(&self, key: &str) -> Result<&ProgramConfig> {
        self.program
            .get(key)
            .ok_or_else(|| PathfinderError::ProgramNotFound(key.to_string()))
    }

    /// Starting view mode; unknown strings fall back to `all`.
    pub fn default_view(&self) -> ViewMode {
        ViewMode::parse_lenient(&self.config.default_view)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Program selected when no `--program` is given.
    #[serde(default)]
    pub default_program: Option<String>,

    /// One of `all`, `enrollOnly`, `examOnly`, `simplified`, `critical`.
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Directory holding one completed-set file per program, relative to the
    /// config file's directory.
    #[serde(default = "default_progress_dir")]
    pub progress_dir: PathBuf,

    /// `"file"` (default) or `"memory"`.
    #[serde(default)]
    pub progress_storage: ProgressStorageMode,
}

fn default_view() -> String {
    "all".to_string()
}

fn default_progress_dir() -> PathBuf {
    PathBuf::from(".pathfinder")
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            default_program: None,
            default_view: default_view(),
            progress_dir: default_progress_dir(),
            progress_storage: ProgressStorageMode::default(),
        }
    }
}

/// `[program.<key>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Display name; the key is used when absent.
    #[serde(default)]
    pub label: Option<String>,

    /// Path to the JSON course list, relative to the config file's directory.
    pub courses: PathBuf,
}

impl ProgramConfig {
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(key)
    }
}
