// src/dag/critical_path.rs

//! Longest chain of enroll prerequisites.
//!
//! `depth(c)` is 1 for a course without enroll requirements, otherwise one
//! more than the deepest of its enroll requirements. The course with the
//! greatest depth ends the critical path, and its depth is the minimum number
//! of sequential terms needed to reach it.
//!
//! Ties are resolved by input order: the first course reaching the maximum
//! depth ends the path, and while walking back the first requirement (in
//! declaration order) with the greatest depth is taken. This only makes the
//! result deterministic; it carries no meaning.
//!
//! Requirements naming courses outside the program are ignored here.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::dag::graph::CourseGraph;
use crate::errors::{PathfinderError, Result};
use crate::types::CourseId;

/// Result of [`solve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalPath {
    /// Ids from the first course to take down to the most deeply gated one.
    chain: Vec<CourseId>,
    length: usize,
    #[serde(skip)]
    ids: BTreeSet<CourseId>,
}

impl CriticalPath {
    /// Number of sequential terms along the path (0 for an empty program).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn chain(&self) -> &[CourseId] {
        &self.chain
    }

    pub fn ids(&self) -> &BTreeSet<CourseId> {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The most deeply gated course.
    pub fn end(&self) -> Option<&str> {
        self.chain.last().map(|s| s.as_str())
    }
}

enum Frame<'a> {
    Enter(&'a str),
    Exit(&'a str),
}

/// Known enroll requirements of `id`, in declaration order.
fn enroll_reqs<'a>(graph: &'a CourseGraph, id: &str) -> impl Iterator<Item = &'a str> + use<'a> {
    graph
        .course(id)
        .into_iter()
        .flat_map(|c| c.enroll_reqs.iter())
        .map(|s| s.as_str())
        .filter(|r| graph.contains(r))
}

/// Compute `depth` for every course.
///
/// Uses an explicit stack, so deep chains cannot overflow the call stack.
/// Re-entering a course whose depth is still being computed means the
/// enroll relation has a cycle and fails with
/// [`PathfinderError::CycleDetected`].
pub fn depths(graph: &CourseGraph) -> Result<HashMap<&str, usize>> {
    let mut depth: HashMap<&str, usize> = HashMap::with_capacity(graph.len());
    let mut path: Vec<&str> = Vec::new();
    let mut on_path: HashSet<&str> = HashSet::new();

    for root in graph.ids() {
        if depth.contains_key(root) {
            continue;
        }

        let mut stack = vec![Frame::Enter(root)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(id) => {
                    if depth.contains_key(id) {
                        continue;
                    }
                    if on_path.contains(id) {
                        let start = path.iter().position(|p| *p == id).unwrap_or(0);
                        let mut cycle: Vec<CourseId> =
                            path[start..].iter().map(|s| s.to_string()).collect();
                        cycle.push(id.to_string());
                        return Err(PathfinderError::CycleDetected { cycle });
                    }

                    on_path.insert(id);
                    path.push(id);
                    stack.push(Frame::Exit(id));

                    let reqs: Vec<&str> = enroll_reqs(graph, id).collect();
                    for req in reqs.into_iter().rev() {
                        stack.push(Frame::Enter(req));
                    }
                }
                Frame::Exit(id) => {
                    let d = 1 + enroll_reqs(graph, id)
                        .filter_map(|r| depth.get(r).copied())
                        .max()
                        .unwrap_or(0);
                    depth.insert(id, d);
                    on_path.remove(id);
                    path.pop();
                }
            }
        }
    }

    Ok(depth)
}

/// Find the critical path of the program.
pub fn solve(graph: &CourseGraph) -> Result<CriticalPath> {
    let depth = depths(graph)?;

    let mut end: Option<(&str, usize)> = None;
    for id in graph.ids() {
        let d = depth.get(id).copied().unwrap_or(0);
        if end.is_none_or(|(_, best)| d > best) {
            end = Some((id, d));
        }
    }

    let Some((end_id, end_depth)) = end else {
        return Ok(CriticalPath::default());
    };

    let mut chain: Vec<CourseId> = Vec::with_capacity(end_depth);
    let mut current = end_id;
    loop {
        chain.push(current.to_string());

        let mut next: Option<(&str, usize)> = None;
        for req in enroll_reqs(graph, current) {
            let d = depth.get(req).copied().unwrap_or(0);
            if next.is_none_or(|(_, best)| d > best) {
                next = Some((req, d));
            }
        }

        match next {
            Some((req, _)) => current = req,
            None => break,
        }
    }
    chain.reverse();

    debug!(end = %end_id, length = chain.len(), "computed critical path");

    let ids = chain.iter().cloned().collect();
    Ok(CriticalPath {
        length: chain.len(),
        chain,
        ids,
    })
}
