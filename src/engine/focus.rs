// src/engine/focus.rs

//! Neighbourhood of a single course within the edges of the active view,
//! used when a student points at one course to see what it connects to.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dag::graph::Edge;
use crate::types::CourseId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Focus {
    pub course: CourseId,
    /// Courses at the other end of an incident edge.
    pub neighbors: BTreeSet<CourseId>,
    /// Incident edges, in their original order.
    pub edges: Vec<Edge>,
}

impl Focus {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

pub fn focus(edges: &[Edge], id: &str) -> Focus {
    let incident: Vec<Edge> = edges
        .iter()
        .filter(|e| e.source == id || e.target == id)
        .cloned()
        .collect();

    let neighbors = incident
        .iter()
        .map(|e| if e.source == id { &e.target } else { &e.source })
        .filter(|other| other.as_str() != id)
        .cloned()
        .collect();

    Focus {
        course: id.to_string(),
        neighbors,
        edges: incident,
    }
}
