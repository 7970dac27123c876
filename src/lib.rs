// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod progress;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::{config_root_dir, load_and_validate, load_program};
use crate::engine::Session;
use crate::progress::store_for;
use crate::types::ProgressStorageMode;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and program selection
/// - the progress store (the completed set lives outside the core)
/// - one [`Session`] for the selected program
/// - the requested command and its output
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)
        .with_context(|| format!("loading config from {:?}", config_path))?;
    let root = config_root_dir(&config_path);

    if matches!(args.command, Command::Programs) {
        return report::print_programs(&cfg, args.json);
    }

    let key = args
        .program
        .clone()
        .or_else(|| cfg.default_program_key().map(str::to_string))
        .ok_or_else(|| anyhow!("no program selected and no default program configured"))?;

    let graph = load_program(&cfg, &root, &key)
        .with_context(|| format!("loading courses for program '{key}'"))?;
    if graph.is_empty() {
        info!(program = %key, "program has no courses");
    }

    let storage = if args.memory {
        ProgressStorageMode::Memory
    } else {
        cfg.config.progress_storage
    };
    let mut store = store_for(storage, root.join(&cfg.config.progress_dir));
    let completed = store
        .load(&key)
        .with_context(|| format!("loading progress for program '{key}'"))?;

    let mut session = Session::new(graph, completed, cfg.default_view());
    debug!(program = %key, mode = %session.mode(), "session ready");

    match args.command {
        Command::Status { view } => {
            if let Some(view) = view {
                session.set_view_str(&view);
            }
            report::print_snapshot(&session.snapshot()?, args.json)
        }
        Command::Toggle { id } => {
            let outcome = session.toggle(&id)?;
            store.save(&key, session.completed())?;
            report::print_toggle(&id, &outcome, &session, args.json)
        }
        Command::Complete { id } => {
            session.complete(&id)?;
            store.save(&key, session.completed())?;
            report::print_toggle(&id, &engine::ToggleOutcome::Completed, &session, args.json)
        }
        Command::Uncomplete { id } => {
            let removed = session.uncomplete(&id)?;
            store.save(&key, session.completed())?;
            let outcome = engine::ToggleOutcome::Uncompleted { removed };
            report::print_toggle(&id, &outcome, &session, args.json)
        }
        Command::Critical => {
            let path = session.critical_path()?;
            report::print_critical(&session, path, args.json)
        }
        Command::Focus { id, view } => {
            if let Some(view) = view {
                session.set_view_str(&view);
            }
            report::print_focus(&session.focus(&id)?, args.json)
        }
        Command::Check => report::print_diagnostics(&session.diagnostics(), args.json),
        Command::Programs => report::print_programs(&cfg, args.json),
    }
}
