// src/progress.rs

//! Completed-set persistence for the command-line front end.
//!
//! The core never touches storage: it receives a completed set and returns
//! a new one. This module is the collaborator on the other side of that
//! boundary.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::Result;
use crate::types::{CompletedSet, ProgressStorageMode};

/// Abstract storage for per-program completed sets.
pub trait ProgressStore: Send + Sync {
    /// Completed set of `program`; empty if nothing was stored yet.
    fn load(&self, program: &str) -> Result<CompletedSet>;
    fn save(&mut self, program: &str, completed: &CompletedSet) -> Result<()>;
}

/// Build the store selected by `mode`. `dir` is only used by file storage.
pub fn store_for(mode: ProgressStorageMode, dir: PathBuf) -> Box<dyn ProgressStore> {
    match mode {
        ProgressStorageMode::File => Box::new(FileProgressStore::new(dir)),
        ProgressStorageMode::Memory => Box::new(MemoryProgressStore::new()),
    }
}

/// One JSON list of ids per program: `<dir>/<program>.json`.
pub struct FileProgressStore {
    dir: PathBuf,
}

impl FileProgressStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, program: &str) -> PathBuf {
        self.dir.join(format!("{program}.json"))
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self, program: &str) -> Result<CompletedSet> {
        let path = self.path_for(program);
        if !path.exists() {
            debug!(program = %program, path = ?path, "no stored progress");
            return Ok(CompletedSet::new());
        }
        read_completed(&path)
    }

    fn save(&mut self, program: &str, completed: &CompletedSet) -> Result<()> {
        let path = self.path_for(program);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let ids: Vec<&str> = completed.iter().map(|s| s.as_str()).collect();
        fs::write(&path, serde_json::to_string_pretty(&ids)?)?;
        info!(program = %program, approved = completed.len(), "stored progress (file)");
        Ok(())
    }
}

fn read_completed(path: &Path) -> Result<CompletedSet> {
    let contents = fs::read_to_string(path)?;
    let ids: Vec<String> = serde_json::from_str(&contents)?;
    Ok(ids.into_iter().collect())
}

/// Keeps completed sets for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    sets: HashMap<String, CompletedSet>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self, program: &str) -> Result<CompletedSet> {
        Ok(self.sets.get(program).cloned().unwrap_or_default())
    }

    fn save(&mut self, program: &str, completed: &CompletedSet) -> Result<()> {
        self.sets.insert(program.to_string(), completed.clone());
        debug!(program = %program, approved = completed.len(), "stored progress (memory)");
        Ok(())
    }
}
