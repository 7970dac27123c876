// tests/property_invariants.rs
mod common;
use crate::common::builders::{CourseBuilder, ProgramBuilder};

use std::collections::{BTreeSet, HashMap, HashSet};

use proptest::prelude::*;

use pathfinder::dag::{Course, CourseGraph, cascade_removals, classify, complete, solve, uncomplete};
use pathfinder::engine::filter_edges;
use pathfinder::types::{CompletedSet, CourseState, ViewMode};

// Acyclic programs: course i may only require courses 0..i.
fn program_strategy(max_courses: usize) -> impl Strategy<Value = Vec<Course>> {
    (1..=max_courses).prop_flat_map(|n| {
        let reqs = proptest::collection::vec(
            (
                proptest::collection::vec(any::<usize>(), 0..3),
                proptest::collection::vec(any::<usize>(), 0..3),
            ),
            n,
        );

        reqs.prop_map(move |raw| {
            let mut program = ProgramBuilder::new();
            for (i, (enroll, exam)) in raw.into_iter().enumerate() {
                let mut course = CourseBuilder::new(&format!("c{i}"));
                if i > 0 {
                    let enroll: BTreeSet<usize> = enroll.into_iter().map(|r| r % i).collect();
                    let exam: BTreeSet<usize> = exam.into_iter().map(|r| r % i).collect();
                    for r in enroll {
                        course = course.enroll(&format!("c{r}"));
                    }
                    for r in exam {
                        course = course.exam(&format!("c{r}"));
                    }
                }
                program = program.with_course(course.build());
            }
            program.courses().to_vec()
        })
    })
}

fn program_and_completed(max_courses: usize) -> impl Strategy<Value = (Vec<Course>, CompletedSet)> {
    program_strategy(max_courses).prop_flat_map(|courses| {
        let n = courses.len();
        (Just(courses), proptest::collection::vec(any::<bool>(), n)).prop_map(|(courses, picks)| {
            let done: CompletedSet = courses
                .iter()
                .zip(picks)
                .filter(|(_, picked)| *picked)
                .map(|(c, _)| c.id.clone())
                .collect();
            (courses, done)
        })
    })
}

/// Fixpoint of "a completed course with a removed prerequisite is removed".
fn removal_oracle(graph: &CourseGraph, id: &str, done: &CompletedSet) -> BTreeSet<String> {
    let mut removed: BTreeSet<String> = BTreeSet::from([id.to_string()]);
    loop {
        let before = removed.len();
        for course in graph.courses() {
            if done.contains(&course.id)
                && !removed.contains(&course.id)
                && course.prerequisites().any(|r| removed.contains(r))
            {
                removed.insert(course.id.clone());
            }
        }
        if removed.len() == before {
            return removed;
        }
    }
}

/// Longest enroll chain, in courses, by a forward pass over input order.
fn longest_enroll_chain(courses: &[Course]) -> usize {
    let mut depth: HashMap<&str, usize> = HashMap::new();
    for course in courses {
        let d = course
            .enroll_reqs
            .iter()
            .filter_map(|r| depth.get(r.as_str()))
            .max()
            .map_or(1, |d| d + 1);
        depth.insert(course.id.as_str(), d);
    }
    depth.values().copied().max().unwrap_or(0)
}

proptest! {
    #[test]
    fn classification_matches_requirements((courses, done) in program_and_completed(12)) {
        for course in &courses {
            let satisfied = course.enroll_reqs.iter().all(|r| done.contains(r))
                && course.exam_reqs.iter().all(|r| done.contains(r));
            let expected = if done.contains(&course.id) {
                CourseState::Approved
            } else if satisfied {
                CourseState::Available
            } else {
                CourseState::Blocked
            };
            prop_assert_eq!(classify(course, &done), expected);
        }
    }

    #[test]
    fn uncomplete_removes_exactly_the_reachable_completed_dependents(
        (courses, done) in program_and_completed(12),
        pick in any::<usize>(),
    ) {
        let graph = CourseGraph::from_courses(courses.clone());
        let id = courses[pick % courses.len()].id.clone();
        prop_assume!(done.contains(&id));

        let removed = cascade_removals(&id, &done, &graph);
        prop_assert_eq!(&removed, &removal_oracle(&graph, &id, &done));

        let next = uncomplete(&id, &done, &graph);
        let expected: CompletedSet = done.difference(&removed).cloned().collect();
        prop_assert_eq!(next, expected);
    }

    #[test]
    fn completing_then_uncompleting_a_fresh_course_restores_the_set(
        (courses, done) in program_and_completed(12),
        pick in any::<usize>(),
    ) {
        let graph = CourseGraph::from_courses(courses.clone());
        let id = courses[pick % courses.len()].id.clone();
        prop_assume!(!done.contains(&id));
        prop_assume!(graph.dependents_of(&id).iter().all(|d| !done.contains(d)));

        let round_trip = uncomplete(&id, &complete(&id, &done), &graph);
        prop_assert_eq!(round_trip, done);
    }

    #[test]
    fn critical_path_is_a_longest_enroll_chain(courses in program_strategy(15)) {
        let graph = CourseGraph::from_courses(courses.clone());
        let path = solve(&graph).expect("generated programs are acyclic");

        prop_assert_eq!(path.length(), longest_enroll_chain(&courses));
        prop_assert_eq!(path.chain().len(), path.length());
        for pair in path.chain().windows(2) {
            let later = graph.course(&pair[1]).expect("chain ids exist");
            prop_assert!(later.enroll_reqs.contains(&pair[0]));
        }
    }

    #[test]
    fn dropping_an_off_path_course_keeps_the_length(
        courses in program_strategy(15),
        pick in any::<usize>(),
    ) {
        let graph = CourseGraph::from_courses(courses.clone());
        let path = solve(&graph).expect("generated programs are acyclic");
        let dropped = courses[pick % courses.len()].id.clone();
        prop_assume!(!path.contains(&dropped));

        let rest: Vec<Course> = courses.into_iter().filter(|c| c.id != dropped).collect();
        let smaller = solve(&CourseGraph::from_courses(rest)).expect("still acyclic");

        prop_assert_eq!(smaller.length(), path.length());
    }

    #[test]
    fn views_are_subsets_of_all((courses, done) in program_and_completed(12)) {
        let graph = CourseGraph::from_courses(courses);
        let view = |mode| filter_edges(graph.edges(), &graph, &done, mode).expect("acyclic");

        let all: HashSet<String> = view(ViewMode::All).iter().map(|e| e.id()).collect();
        let enroll: HashSet<String> = view(ViewMode::EnrollOnly).iter().map(|e| e.id()).collect();
        let exam: HashSet<String> = view(ViewMode::ExamOnly).iter().map(|e| e.id()).collect();

        prop_assert!(enroll.is_disjoint(&exam));
        prop_assert_eq!(enroll.union(&exam).cloned().collect::<HashSet<_>>(), all.clone());

        for mode in [ViewMode::Simplified, ViewMode::Critical] {
            for edge in view(mode) {
                prop_assert!(all.contains(&edge.id()));
            }
        }

        for edge in view(ViewMode::Simplified) {
            let source = graph.course(&edge.source).expect("edge sources exist");
            prop_assert!(classify(source, &done).is_actionable());
        }
    }
}
