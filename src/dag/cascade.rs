// src/dag/cascade.rs

//! Completion and cascading un-completion.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dag::graph::CourseGraph;
use crate::types::{CompletedSet, CourseId};

/// Mark a course completed. Completing never cascades.
pub fn complete(id: &str, completed: &CompletedSet) -> CompletedSet {
    let mut next = completed.clone();
    next.insert(id.to_string());
    next
}

/// Ids that un-completing `id` removes: `id` itself plus every completed
/// course reachable from it through completed dependents.
///
/// This is plain forward reachability. A dependent is removed even when its
/// other prerequisites would still hold on their own; nothing is re-solved.
pub fn cascade_removals(id: &str, completed: &CompletedSet, graph: &CourseGraph) -> BTreeSet<CourseId> {
    let mut removed: BTreeSet<CourseId> = BTreeSet::new();
    let mut stack: Vec<CourseId> = vec![id.to_string()];
    removed.insert(id.to_string());

    while let Some(current) = stack.pop() {
        for dependent in graph.dependents_of(&current) {
            if completed.contains(dependent) && !removed.contains(dependent) {
                debug!(
                    course = %dependent,
                    via = %current,
                    "un-completing dependent of a revoked course"
                );
                removed.insert(dependent.clone());
                stack.push(dependent.clone());
            }
        }
    }

    removed
}

/// Un-mark `id` and every completed course depending on it, directly or
/// through a chain of completed courses. The input set is left untouched.
pub fn uncomplete(id: &str, completed: &CompletedSet, graph: &CourseGraph) -> CompletedSet {
    let removed = cascade_removals(id, completed, graph);
    completed.difference(&removed).cloned().collect()
}
