// src/report.rs

//! Text and JSON output for the command-line front end.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::config::ConfigFile;
use crate::dag::{CriticalPath, DataWarning};
use crate::engine::{Focus, Session, Snapshot, ToggleOutcome};
use crate::types::CourseState;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn marker(state: CourseState) -> &'static str {
    match state {
        CourseState::Approved => "[x]",
        CourseState::Available => "[ ]",
        CourseState::Blocked => "[-]",
    }
}

pub fn print_snapshot(snapshot: &Snapshot, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(snapshot);
    }

    let p = snapshot.progress;
    println!(
        "approved {}/{} ({:.0}%), available {}, blocked {}",
        p.approved,
        p.total,
        p.ratio() * 100.0,
        p.available,
        p.blocked
    );
    println!();

    let mut level = None;
    for course in &snapshot.courses {
        if level != Some(course.level) {
            level = Some(course.level);
            println!("level {}:", course.level);
        }
        println!("  {} {:<8} {}", marker(course.state), course.id, course.name);
    }

    println!();
    println!("edges ({}, view {}):", snapshot.edges.len(), snapshot.mode);
    for edge in &snapshot.edges {
        println!("  {} -> {} ({})", edge.source, edge.target, edge.kind);
    }

    if let Some(ref critical) = snapshot.critical {
        println!();
        println!(
            "critical path ({} terms): {}",
            critical.length(),
            critical.chain().join(" -> ")
        );
    }

    Ok(())
}

pub fn print_toggle(id: &str, outcome: &ToggleOutcome, session: &Session, as_json: bool) -> Result<()> {
    let approved = session.completed().len();

    if as_json {
        let value = match outcome {
            ToggleOutcome::Completed => json!({ "course": id, "outcome": "completed", "approved": approved }),
            ToggleOutcome::Uncompleted { removed } => json!({
                "course": id,
                "outcome": "uncompleted",
                "removed": removed,
                "approved": approved,
            }),
            ToggleOutcome::Refused => json!({ "course": id, "outcome": "refused", "approved": approved }),
        };
        return print_json(&value);
    }

    match outcome {
        ToggleOutcome::Completed => println!("completed {id}"),
        ToggleOutcome::Uncompleted { removed } => {
            println!("un-completed {id}");
            let cascaded: Vec<&str> = removed
                .iter()
                .map(|s| s.as_str())
                .filter(|r| *r != id)
                .collect();
            if !cascaded.is_empty() {
                println!("also un-completed: {}", cascaded.join(", "));
            }
        }
        ToggleOutcome::Refused => println!("{id} is blocked; complete its requirements first"),
    }
    println!("approved: {approved}");
    Ok(())
}

pub fn print_critical(session: &Session, path: &CriticalPath, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(path);
    }

    if path.is_empty() {
        println!("program has no courses");
        return Ok(());
    }

    println!("critical path: {} terms", path.length());
    for (term, id) in path.chain().iter().enumerate() {
        let name = session
            .graph()
            .course(id)
            .map(|c| c.name.as_str())
            .unwrap_or("");
        let state = session.state(id).map(marker).unwrap_or("");
        println!("  {:>2}. {} {:<8} {}", term + 1, state, id, name);
    }
    Ok(())
}

pub fn print_focus(focus: &Focus, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(focus);
    }

    if focus.is_empty() {
        println!("{} has no connections in this view", focus.course);
        return Ok(());
    }

    println!("{} connects to:", focus.course);
    for edge in &focus.edges {
        println!("  {} -> {} ({})", edge.source, edge.target, edge.kind);
    }
    Ok(())
}

pub fn print_diagnostics(warnings: &[DataWarning], as_json: bool) -> Result<()> {
    if as_json {
        let messages: Vec<String> = warnings.iter().map(|w| w.to_string()).collect();
        return print_json(&messages);
    }

    if warnings.is_empty() {
        println!("course data looks consistent");
    }
    for w in warnings {
        println!("warning: {w}");
    }
    Ok(())
}

pub fn print_programs(cfg: &ConfigFile, as_json: bool) -> Result<()> {
    let default = cfg.default_program_key();

    if as_json {
        let programs: Vec<_> = cfg
            .program
            .iter()
            .map(|(key, p)| {
                json!({
                    "key": key,
                    "label": p.display_label(key),
                    "courses": p.courses,
                    "default": Some(key.as_str()) == default,
                })
            })
            .collect();
        return print_json(&programs);
    }

    for (key, program) in cfg.program.iter() {
        let mark = if Some(key.as_str()) == default { "*" } else { " " };
        println!("{mark} {key:<12} {}", program.display_label(key));
    }
    Ok(())
}
