// src/config/validate.rs

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PathfinderError, Result};
use crate::types::ViewMode;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PathfinderError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.program))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_programs(cfg)?;
    validate_global_config(cfg)?;
    validate_programs(cfg)?;
    Ok(())
}

fn ensure_has_programs(cfg: &RawConfigFile) -> Result<()> {
    if cfg.program.is_empty() {
        return Err(PathfinderError::ConfigError(
            "config must contain at least one [program.<key>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ref key) = cfg.config.default_program {
        if !cfg.program.contains_key(key) {
            return Err(PathfinderError::ConfigError(format!(
                "[config].default_program '{}' is not a known program",
                key
            )));
        }
    }

    // View modes come from UI-ish input and never fail; just say so.
    if cfg.config.default_view.parse::<ViewMode>().is_err() {
        warn!(
            view = %cfg.config.default_view,
            "[config].default_view is not a known view mode; using all"
        );
    }

    Ok(())
}

fn validate_programs(cfg: &RawConfigFile) -> Result<()> {
    for (key, program) in cfg.program.iter() {
        if program.courses.as_os_str().is_empty() {
            return Err(PathfinderError::ConfigError(format!(
                "program '{}' has an empty `courses` path",
                key
            )));
        }
    }
    Ok(())
}
