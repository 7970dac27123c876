// src/engine/snapshot.rs

//! What the renderer receives after each user action.

use serde::Serialize;

use crate::dag::critical_path::CriticalPath;
use crate::dag::graph::Edge;
use crate::types::{CourseId, CourseState, ViewMode};

/// One course as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub id: CourseId,
    pub name: String,
    pub level: u32,
    pub state: CourseState,
}

/// Counts per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub approved: usize,
    pub available: usize,
    pub blocked: usize,
}

impl Progress {
    pub fn from_states<'a>(states: impl IntoIterator<Item = &'a CourseState>) -> Self {
        let mut p = Progress::default();
        for state in states {
            p.total += 1;
            match state {
                CourseState::Approved => p.approved += 1,
                CourseState::Available => p.available += 1,
                CourseState::Blocked => p.blocked += 1,
            }
        }
        p
    }

    /// Share of approved courses, 0.0 for an empty program.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.approved as f64 / self.total as f64
        }
    }
}

/// Consistent view of one `(courses, completed set, mode)` triple.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub mode: ViewMode,
    /// Courses in input order.
    pub courses: Vec<CourseView>,
    pub edges: Vec<Edge>,
    /// Present in critical mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<CriticalPath>,
    pub progress: Progress,
}

impl Snapshot {
    pub fn state_of(&self, id: &str) -> Option<CourseState> {
        self.courses.iter().find(|c| c.id == id).map(|c| c.state)
    }
}
