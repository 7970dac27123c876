// tests/demo_catalog.rs
mod common;
use crate::common::{completed, init_tracing};

use std::error::Error;
use std::path::PathBuf;

use pathfinder::config::load_and_validate;
use pathfinder::config::loader::{config_root_dir, load_program};
use pathfinder::dag::diagnose;
use pathfinder::engine::{Session, ToggleOutcome};
use pathfinder::types::{CompletedSet, CourseState, ViewMode};

type TestResult = Result<(), Box<dyn Error>>;

fn demo_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/Pathfinder.toml")
}

fn demo_session(key: &str) -> Result<Session, Box<dyn Error>> {
    let path = demo_config();
    let cfg = load_and_validate(&path)?;
    let graph = load_program(&cfg, &config_root_dir(&path), key)?;
    Ok(Session::new(graph, CompletedSet::new(), cfg.default_view()))
}

#[test]
fn demo_catalog_lists_both_programs() -> TestResult {
    init_tracing();

    let cfg = load_and_validate(demo_config())?;

    assert_eq!(cfg.default_program_key(), Some("tup"));
    assert_eq!(cfg.default_view(), ViewMode::Simplified);
    assert_eq!(cfg.program.keys().collect::<Vec<_>>(), vec!["intro", "tup"]);
    Ok(())
}

#[test]
fn tup_data_loads_cleanly() -> TestResult {
    init_tracing();

    let session = demo_session("tup")?;
    let graph = session.graph();

    assert_eq!(graph.len(), 15);
    assert!(diagnose(graph).is_empty());
    assert_eq!(graph.course("15").map(|c| c.level), Some(5));

    let fresh: Vec<&str> = graph
        .ids()
        .filter(|id| session.state(id) == Some(CourseState::Available))
        .collect();
    assert_eq!(fresh, vec!["1", "2", "3", "4", "8"]);
    Ok(())
}

#[test]
fn tup_first_year_walkthrough() -> TestResult {
    init_tracing();

    let mut session = demo_session("tup")?;

    assert_eq!(session.toggle("1")?, ToggleOutcome::Completed);
    assert_eq!(session.state("5"), Some(CourseState::Available));
    assert_eq!(session.state("7"), Some(CourseState::Available));
    assert_eq!(session.toggle("11")?, ToggleOutcome::Refused);

    session.toggle("5")?;
    session.toggle("7")?;
    assert_eq!(session.state("11"), Some(CourseState::Available));

    // Programación III also needs Matemática for its exam.
    assert_eq!(session.state("9"), Some(CourseState::Blocked));
    session.toggle("3")?;
    assert_eq!(session.state("9"), Some(CourseState::Available));

    let outcome = session.toggle("1")?;
    assert_eq!(
        outcome,
        ToggleOutcome::Uncompleted {
            removed: completed(&["1", "5", "7"])
        }
    );
    assert_eq!(session.completed(), &completed(&["3"]));
    Ok(())
}

#[test]
fn tup_critical_path_runs_through_programming_track() -> TestResult {
    init_tracing();

    let mut session = demo_session("tup")?;

    let path = session.critical_path()?;
    assert_eq!(path.length(), 5);
    assert_eq!(path.chain(), ["1", "5", "9", "13", "15"]);

    // Where an exam requirement repeats an enroll one, only the exam edge
    // exists, so the critical view shows just the last link.
    session.set_view(ViewMode::Critical);
    let edges: Vec<String> = session.visible_edges()?.iter().map(|e| e.id()).collect();
    assert_eq!(edges, vec!["enroll-13-15".to_string()]);
    Ok(())
}

#[test]
fn intro_program_mixes_requirement_kinds() -> TestResult {
    init_tracing();

    let mut session = demo_session("intro")?;
    session.complete("A")?;
    session.complete("B")?;

    assert_eq!(session.state("D"), Some(CourseState::Blocked));
    session.toggle("C")?;
    assert_eq!(session.state("D"), Some(CourseState::Available));

    assert_eq!(session.critical_path()?.chain(), ["A", "B", "D"]);
    Ok(())
}
