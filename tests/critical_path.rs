// tests/critical_path.rs
mod common;
use crate::common::builders::{CourseBuilder, ProgramBuilder};
use crate::common::{completed, init_tracing};

use pathfinder::dag::critical_path::depths;
use pathfinder::dag::{CourseGraph, solve};
use pathfinder::errors::PathfinderError;

#[test]
fn chain_is_its_own_critical_path() {
    init_tracing();

    let path = solve(&common::chain_program()).expect("chain is acyclic");

    assert_eq!(path.length(), 4);
    assert_eq!(path.ids(), &completed(&["A", "B", "C", "D"]));
    assert_eq!(path.chain(), &["A", "B", "C", "D"]);
    assert_eq!(path.end(), Some("D"));
}

#[test]
fn empty_program_has_empty_path() {
    let path = solve(&CourseGraph::default()).expect("empty graph is acyclic");

    assert!(path.is_empty());
    assert_eq!(path.length(), 0);
}

#[test]
fn only_enroll_requirements_count() {
    init_tracing();

    // B needs A only for the exam, so B starts a chain of its own.
    let graph = ProgramBuilder::new()
        .with_root("A")
        .with_course(CourseBuilder::new("B").exam("A").build())
        .with_course(CourseBuilder::new("C").enroll("B").build())
        .build();

    let path = solve(&graph).expect("acyclic");

    assert_eq!(path.length(), 2);
    assert_eq!(path.chain(), &["B", "C"]);
}

#[test]
fn deepest_end_ties_resolve_to_first_in_input_order() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_root("A")
        .with_root("X")
        .with_course(CourseBuilder::new("Y").enroll("X").build())
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .build();

    let path = solve(&graph).expect("acyclic");

    assert_eq!(path.length(), 2);
    assert_eq!(path.chain(), &["X", "Y"]);
}

#[test]
fn reconstruction_prefers_first_declared_of_equal_depth() {
    init_tracing();

    // D needs B and C (both depth 2, both after A).
    let graph = ProgramBuilder::new()
        .with_root("A")
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .with_course(CourseBuilder::new("C").enroll("A").build())
        .with_course(CourseBuilder::new("D").enroll("C").enroll("B").build())
        .build();

    let path = solve(&graph).expect("acyclic");

    assert_eq!(path.chain(), &["A", "C", "D"]);
    assert!(!path.contains("B"));
}

#[test]
fn reconstruction_follows_deepest_requirement() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_enroll_chain(&["A", "B", "C"])
        .with_root("S")
        .with_course(CourseBuilder::new("E").enroll("S").enroll("C").build())
        .build();

    let depth = depths(&graph).expect("acyclic");
    assert_eq!(depth.get("E"), Some(&4));
    assert_eq!(depth.get("S"), Some(&1));

    let path = solve(&graph).expect("acyclic");
    assert_eq!(path.chain(), &["A", "B", "C", "E"]);
}

#[test]
fn requirements_outside_program_are_ignored() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_course(CourseBuilder::new("A").enroll("GHOST").build())
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .build();

    let path = solve(&graph).expect("acyclic");

    assert_eq!(path.chain(), &["A", "B"]);
}

#[test]
fn two_course_cycle_is_reported() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_course(CourseBuilder::new("A").enroll("B").build())
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .build();

    match solve(&graph) {
        Err(PathfinderError::CycleDetected { cycle }) => {
            assert_eq!(cycle.first(), cycle.last());
            assert!(cycle.contains(&"A".to_string()));
            assert!(cycle.contains(&"B".to_string()));
            assert_eq!(cycle.len(), 3);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn self_reference_is_a_one_course_cycle() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_root("A")
        .with_course(CourseBuilder::new("B").enroll("A").enroll("B").build())
        .build();

    match solve(&graph) {
        Err(PathfinderError::CycleDetected { cycle }) => {
            assert_eq!(cycle, vec!["B".to_string(), "B".to_string()]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_behind_acyclic_prefix_is_found() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_root("A")
        .with_course(CourseBuilder::new("B").enroll("A").enroll("D").build())
        .with_course(CourseBuilder::new("C").enroll("B").build())
        .with_course(CourseBuilder::new("D").enroll("C").build())
        .build();

    let err = solve(&graph).expect_err("B -> C -> D -> B is a cycle");
    assert!(matches!(err, PathfinderError::CycleDetected { .. }));
    assert!(err.to_string().contains("cycle detected"));
}

#[test]
fn exam_only_cycle_does_not_affect_critical_path() {
    init_tracing();

    let graph = ProgramBuilder::new()
        .with_course(CourseBuilder::new("A").exam("B").build())
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .build();

    let path = solve(&graph).expect("enroll relation is acyclic");
    assert_eq!(path.chain(), &["A", "B"]);
}

#[test]
fn very_long_chain_does_not_overflow() {
    init_tracing();

    let ids: Vec<String> = (0..20_000).map(|i| format!("c{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
    // Reverse input order so the walk starts at the deepest course.
    let mut courses = ProgramBuilder::new().with_enroll_chain(&refs).courses().to_vec();
    courses.reverse();
    let graph = CourseGraph::from_courses(courses);

    let path = solve(&graph).expect("acyclic");
    assert_eq!(path.length(), 20_000);
    assert_eq!(path.chain().first().map(|s| s.as_str()), Some("c0"));
}
