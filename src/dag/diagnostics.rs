// src/dag/diagnostics.rs

//! Non-fatal data-quality checks over a built [`CourseGraph`].
//!
//! None of these stop classification or filtering; they exist so a caller
//! can tell a student (or a data maintainer) why a course can never become
//! available, or why the critical-path view is disabled.

use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::dag::course::SkipReason;
use crate::dag::graph::CourseGraph;
use crate::types::{CourseId, EdgeKind};

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// `course` requires `missing`, which is not a course of this program.
    DanglingReference {
        course: CourseId,
        missing: CourseId,
        kind: EdgeKind,
    },
    /// `course` lists itself as a prerequisite.
    SelfReference { course: CourseId },
    /// A record at `index` was dropped while building the graph.
    SkippedRecord {
        index: usize,
        id: Option<CourseId>,
        reason: SkipReason,
    },
    /// These courses require each other (directly or transitively).
    Cycle { courses: Vec<CourseId> },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::DanglingReference { course, missing, kind } => write!(
                f,
                "course '{course}' has unknown {kind} requirement '{missing}'; it can never become available"
            ),
            DataWarning::SelfReference { course } => {
                write!(f, "course '{course}' requires itself")
            }
            DataWarning::SkippedRecord { index, id: Some(id), reason } => {
                write!(f, "record #{index} ('{id}') skipped: {reason}")
            }
            DataWarning::SkippedRecord { index, id: None, reason } => {
                write!(f, "record #{index} skipped: {reason}")
            }
            DataWarning::Cycle { courses } => {
                write!(f, "prerequisite cycle between courses: {}", courses.join(", "))
            }
        }
    }
}

/// Run every check and return the findings in a stable order: skipped
/// records, then per-course reference problems in input order, then cycles.
pub fn diagnose(graph: &CourseGraph) -> Vec<DataWarning> {
    let mut warnings: Vec<DataWarning> = graph
        .skipped()
        .iter()
        .map(|s| DataWarning::SkippedRecord {
            index: s.index,
            id: s.id.clone(),
            reason: s.reason,
        })
        .collect();

    warnings.extend(reference_warnings(graph));
    warnings.extend(cycle_warnings(graph));

    for w in &warnings {
        warn!(warning = %w, "course data");
    }

    warnings
}

fn reference_warnings(graph: &CourseGraph) -> Vec<DataWarning> {
    let mut out = Vec::new();

    for course in graph.courses() {
        if course.depends_on(&course.id) {
            out.push(DataWarning::SelfReference {
                course: course.id.clone(),
            });
        }

        for kind in [EdgeKind::Enroll, EdgeKind::Exam] {
            for req in course.reqs(kind) {
                if !graph.contains(req) {
                    out.push(DataWarning::DanglingReference {
                        course: course.id.clone(),
                        missing: req.clone(),
                        kind,
                    });
                }
            }
        }
    }

    out
}

/// Cycles over the combined enroll + exam relation.
///
/// Edge direction: prerequisite -> dependent. Self-references are reported
/// separately, so only components with more than one course show up here.
fn cycle_warnings(graph: &CourseGraph) -> Vec<DataWarning> {
    let mut g: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in graph.ids() {
        g.add_node(id);
    }
    for course in graph.courses() {
        for req in course.prerequisites() {
            if graph.contains(req) && req != &course.id {
                g.add_edge(req.as_str(), course.id.as_str(), ());
            }
        }
    }

    let mut cycles: Vec<Vec<CourseId>> = tarjan_scc(&g)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut ids: Vec<&str> = component;
            ids.sort_by_key(|id| graph.position(id).unwrap_or(usize::MAX));
            ids.into_iter().map(str::to_string).collect()
        })
        .collect();

    cycles.sort_by_key(|c| c.first().and_then(|id| graph.position(id)).unwrap_or(usize::MAX));

    cycles
        .into_iter()
        .map(|courses| DataWarning::Cycle { courses })
        .collect()
}

/// Whether the combined prerequisite relation is acyclic (self-references
/// included).
pub fn is_acyclic(graph: &CourseGraph) -> bool {
    let has_self = graph.courses().any(|c| c.depends_on(&c.id));
    !has_self && cycle_warnings(graph).is_empty()
}
