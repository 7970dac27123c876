// src/dag/classify.rs

//! Per-course eligibility against a completed set.

use crate::dag::course::Course;
use crate::dag::graph::CourseGraph;
use crate::types::{CompletedSet, CourseId, CourseState};

/// Classify one course.
///
/// - `Approved` if the course itself is completed.
/// - `Available` if every id in both requirement lists is completed. A course
///   with no requirements is available straight away.
/// - `Blocked` otherwise.
///
/// This is a bare set check: a requirement naming a course that does not
/// exist is met if `completed` holds that id. Use [`classify_in`] when the
/// graph is at hand.
pub fn classify(course: &Course, completed: &CompletedSet) -> CourseState {
    if completed.contains(&course.id) {
        return CourseState::Approved;
    }

    let satisfied = |reqs: &[CourseId]| reqs.iter().all(|r| completed.contains(r));

    if satisfied(&course.enroll_reqs) && satisfied(&course.exam_reqs) {
        CourseState::Available
    } else {
        CourseState::Blocked
    }
}

/// Classify `course` as a member of `graph`.
///
/// A requirement only counts as met when it names a course of `graph`, so a
/// dangling requirement keeps the course blocked whatever `completed` holds.
pub fn classify_in(graph: &CourseGraph, course: &Course, completed: &CompletedSet) -> CourseState {
    if completed.contains(&course.id) {
        return CourseState::Approved;
    }

    let met = |r: &CourseId| graph.contains(r) && completed.contains(r);

    if course.prerequisites().all(met) {
        CourseState::Available
    } else {
        CourseState::Blocked
    }
}

/// Classify every course of the graph, in input order.
pub fn classify_all(graph: &CourseGraph, completed: &CompletedSet) -> Vec<(CourseId, CourseState)> {
    graph
        .courses()
        .map(|c| (c.id.clone(), classify_in(graph, c, completed)))
        .collect()
}

/// State of the course with the given id, or `None` if it is not in the graph.
pub fn state_of(graph: &CourseGraph, id: &str, completed: &CompletedSet) -> Option<CourseState> {
    graph.course(id).map(|c| classify_in(graph, c, completed))
}
