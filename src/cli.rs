// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `pathfinder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pathfinder",
    version,
    about = "Track progress through a program's course prerequisite graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Pathfinder.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Pathfinder.toml")]
    pub config: String,

    /// Program key from the config; defaults to `[config].default_program`.
    #[arg(long, value_name = "KEY")]
    pub program: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PATHFINDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Keep progress in memory only; nothing is read from or written to disk.
    #[arg(long)]
    pub memory: bool,

    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every course with its state and the edges of a view.
    Status {
        /// View mode (all, enrollOnly, examOnly, simplified, critical).
        #[arg(long, value_name = "MODE")]
        view: Option<String>,
    },
    /// Click a course: complete it if available, un-complete it (and its
    /// completed dependents) if approved.
    Toggle { id: String },
    /// Mark a course completed, whatever its state.
    Complete { id: String },
    /// Un-mark a course and every completed course depending on it.
    Uncomplete { id: String },
    /// Print the longest chain of enroll prerequisites.
    Critical,
    /// Show the courses and edges connected to one course.
    Focus {
        id: String,
        #[arg(long, value_name = "MODE")]
        view: Option<String>,
    },
    /// Report data-quality problems in the program's course data.
    Check,
    /// List configured programs.
    Programs,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
