// src/engine/view.rs

//! Edge subsets for each [`ViewMode`].

use std::collections::HashSet;

use tracing::debug;

use crate::dag::classify::state_of;
use crate::dag::critical_path::{CriticalPath, solve};
use crate::dag::graph::{CourseGraph, Edge};
use crate::errors::Result;
use crate::types::{CompletedSet, EdgeKind, ViewMode};

/// Select the edges shown in `mode`. Inputs are never modified.
///
/// - `All`: every edge.
/// - `EnrollOnly` / `ExamOnly`: edges of that kind.
/// - `Simplified`: edges whose source is Approved or Available, one per
///   (source, target) pair.
/// - `Critical`: enroll edges with both ends on the critical path. Only this
///   mode can fail, with [`crate::errors::PathfinderError::CycleDetected`].
pub fn filter_edges(
    edges: &[Edge],
    graph: &CourseGraph,
    completed: &CompletedSet,
    mode: ViewMode,
) -> Result<Vec<Edge>> {
    if mode == ViewMode::Critical {
        let path = solve(graph)?;
        return Ok(critical_edges(edges, &path));
    }
    Ok(filter_non_critical(edges, graph, completed, mode))
}

/// Same as [`filter_edges`] for a critical path the caller already has.
pub fn filter_edges_with_path(
    edges: &[Edge],
    graph: &CourseGraph,
    completed: &CompletedSet,
    mode: ViewMode,
    path: &CriticalPath,
) -> Vec<Edge> {
    if mode == ViewMode::Critical {
        return critical_edges(edges, path);
    }
    filter_non_critical(edges, graph, completed, mode)
}

fn filter_non_critical(
    edges: &[Edge],
    graph: &CourseGraph,
    completed: &CompletedSet,
    mode: ViewMode,
) -> Vec<Edge> {
    let out: Vec<Edge> = match mode {
        ViewMode::All | ViewMode::Critical => edges.to_vec(),
        ViewMode::EnrollOnly => of_kind(edges, EdgeKind::Enroll),
        ViewMode::ExamOnly => of_kind(edges, EdgeKind::Exam),
        ViewMode::Simplified => simplified(edges, graph, completed),
    };
    debug!(%mode, kept = out.len(), total = edges.len(), "filtered edges");
    out
}

fn of_kind(edges: &[Edge], kind: EdgeKind) -> Vec<Edge> {
    edges.iter().filter(|e| e.kind == kind).cloned().collect()
}

fn simplified(edges: &[Edge], graph: &CourseGraph, completed: &CompletedSet) -> Vec<Edge> {
    // Graph-derived edges never share a pair; hand-built lists may.
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    edges
        .iter()
        .filter(|e| {
            // Unknown sources count as blocked.
            state_of(graph, &e.source, completed).is_some_and(|s| s.is_actionable())
        })
        .filter(|e| seen.insert((e.source.as_str(), e.target.as_str())))
        .cloned()
        .collect()
}

/// Enroll edges with both endpoints on `path`.
pub fn critical_edges(edges: &[Edge], path: &CriticalPath) -> Vec<Edge> {
    edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Enroll && path.contains(&e.source) && path.contains(&e.target))
        .cloned()
        .collect()
}
