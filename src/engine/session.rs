// src/engine/session.rs

//! Pure session state for one selected program.
//!
//! A [`Session`] owns the course graph, the completed set and the active view
//! mode. Every user action (toggle, program switch, view switch) replaces
//! the completed set or mode in a single assignment, so a [`Snapshot`] always
//! reflects one consistent state. There is no IO in here; loading programs
//! and persisting completed sets belong to the caller.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::dag::cascade::{cascade_removals, complete};
use crate::dag::classify::{classify_in, state_of};
use crate::dag::critical_path::{CriticalPath, solve};
use crate::dag::diagnostics::{DataWarning, diagnose};
use crate::dag::graph::{CourseGraph, Edge};
use crate::engine::focus::{Focus, focus};
use crate::engine::snapshot::{CourseView, Progress, Snapshot};
use crate::engine::view::filter_edges_with_path;
use crate::errors::{PathfinderError, Result};
use crate::types::{CompletedSet, CourseId, CourseState, ViewMode};

/// What a toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The course was available and is now approved.
    Completed,
    /// The course was approved; it and the listed dependents were un-marked.
    /// `removed` includes the toggled course.
    Uncompleted { removed: BTreeSet<CourseId> },
    /// The course is blocked; nothing changed.
    Refused,
}

#[derive(Debug, Clone)]
pub struct Session {
    graph: CourseGraph,
    completed: CompletedSet,
    mode: ViewMode,
    /// Solved once per graph; `Err` holds the detected cycle.
    critical: std::result::Result<CriticalPath, Vec<CourseId>>,
}

impl Session {
    pub fn new(graph: CourseGraph, completed: CompletedSet, mode: ViewMode) -> Self {
        let completed = known_only(&graph, completed);
        let critical = solve_for(&graph);
        Self {
            graph,
            completed,
            mode,
            critical,
        }
    }

    pub fn graph(&self) -> &CourseGraph {
        &self.graph
    }

    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn state(&self, id: &str) -> Option<CourseState> {
        state_of(&self.graph, id, &self.completed)
    }

    /// Replace the program. The caller supplies the completed set that
    /// belongs to the new program.
    pub fn switch_program(&mut self, graph: CourseGraph, completed: CompletedSet) {
        info!(courses = graph.len(), "switching program");
        self.completed = known_only(&graph, completed);
        self.critical = solve_for(&graph);
        self.graph = graph;
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        debug!(from = %self.mode, to = %mode, "switching view");
        self.mode = mode;
    }

    /// Like [`Session::set_view`], for a mode string from a UI; unknown
    /// values select [`ViewMode::All`].
    pub fn set_view_str(&mut self, mode: &str) {
        self.set_view(ViewMode::parse_lenient(mode));
    }

    /// Click behaviour: approved courses are un-completed (with cascade),
    /// available ones completed, blocked ones left alone.
    pub fn toggle(&mut self, id: &str) -> Result<ToggleOutcome> {
        let course = self
            .graph
            .course(id)
            .ok_or_else(|| PathfinderError::CourseNotFound(id.to_string()))?;

        match classify_in(&self.graph, course, &self.completed) {
            CourseState::Approved => {
                let removed = self.uncomplete(id)?;
                Ok(ToggleOutcome::Uncompleted { removed })
            }
            CourseState::Available => {
                self.complete(id)?;
                Ok(ToggleOutcome::Completed)
            }
            CourseState::Blocked => {
                info!(course = %id, "course is blocked; toggle ignored");
                Ok(ToggleOutcome::Refused)
            }
        }
    }

    /// Mark a course completed regardless of its current state.
    pub fn complete(&mut self, id: &str) -> Result<()> {
        self.ensure_known(id)?;
        self.completed = complete(id, &self.completed);
        info!(course = %id, approved = self.completed.len(), "course completed");
        Ok(())
    }

    /// Un-mark a course and every completed course depending on it.
    ///
    /// Returns the ids that were removed from the completed set (only those
    /// that were actually completed).
    pub fn uncomplete(&mut self, id: &str) -> Result<BTreeSet<CourseId>> {
        self.ensure_known(id)?;

        let removals = cascade_removals(id, &self.completed, &self.graph);
        let removed: BTreeSet<CourseId> = removals
            .iter()
            .filter(|r| self.completed.contains(*r))
            .cloned()
            .collect();

        self.completed = self.completed.difference(&removals).cloned().collect();

        info!(
            course = %id,
            cascaded = removed.len().saturating_sub(1),
            approved = self.completed.len(),
            "course un-completed"
        );
        Ok(removed)
    }

    /// Critical path of the current program.
    pub fn critical_path(&self) -> Result<&CriticalPath> {
        self.critical
            .as_ref()
            .map_err(|cycle| PathfinderError::CycleDetected {
                cycle: cycle.clone(),
            })
    }

    /// Edges of the active view.
    pub fn visible_edges(&self) -> Result<Vec<Edge>> {
        let empty = CriticalPath::default();
        let path = if self.mode == ViewMode::Critical {
            self.critical_path()?
        } else {
            &empty
        };
        Ok(filter_edges_with_path(
            self.graph.edges(),
            &self.graph,
            &self.completed,
            self.mode,
            path,
        ))
    }

    /// Neighbourhood of one course within the active view.
    pub fn focus(&self, id: &str) -> Result<Focus> {
        self.ensure_known(id)?;
        Ok(focus(&self.visible_edges()?, id))
    }

    pub fn diagnostics(&self) -> Vec<DataWarning> {
        diagnose(&self.graph)
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        let courses: Vec<CourseView> = self
            .graph
            .courses()
            .map(|c| CourseView {
                id: c.id.clone(),
                name: c.name.clone(),
                level: c.level,
                state: classify_in(&self.graph, c, &self.completed),
            })
            .collect();

        let progress = Progress::from_states(courses.iter().map(|c| &c.state));
        let edges = self.visible_edges()?;
        let critical = match self.mode {
            ViewMode::Critical => Some(self.critical_path()?.clone()),
            _ => None,
        };

        Ok(Snapshot {
            mode: self.mode,
            courses,
            edges,
            critical,
            progress,
        })
    }

    fn ensure_known(&self, id: &str) -> Result<()> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(PathfinderError::CourseNotFound(id.to_string()))
        }
    }
}

/// Drop ids that are not courses of `graph`, so a stale completed set can
/// never satisfy a dangling requirement.
fn known_only(graph: &CourseGraph, completed: CompletedSet) -> CompletedSet {
    let (known, unknown): (CompletedSet, CompletedSet) =
        completed.into_iter().partition(|id| graph.contains(id));
    if !unknown.is_empty() {
        warn!(?unknown, "ignoring completed ids that are not courses of this program");
    }
    known
}

fn solve_for(graph: &CourseGraph) -> std::result::Result<CriticalPath, Vec<CourseId>> {
    solve(graph).map_err(|err| match err {
        PathfinderError::CycleDetected { cycle } => {
            warn!(cycle = %cycle.join(" -> "), "critical path unavailable");
            cycle
        }
        other => {
            warn!(error = %other, "critical path unavailable");
            Vec::new()
        }
    })
}
