// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::dag::course::{Course, CourseRecord, SkipReason};
use crate::types::{CourseId, EdgeKind};

/// Directed prerequisite relation between two courses.
///
/// `source` must be completed before `target` can be enrolled in
/// ([`EdgeKind::Enroll`]) or examined ([`EdgeKind::Exam`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: CourseId,
    pub target: CourseId,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(source: impl Into<CourseId>, target: impl Into<CourseId>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Stable identifier, e.g. `exam-1-3`.
    pub fn id(&self) -> String {
        format!("{}-{}-{}", self.kind, self.source, self.target)
    }
}

/// A record that did not make it into the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the input list.
    pub index: usize,
    pub id: Option<CourseId>,
    pub reason: SkipReason,
}

/// Arena of courses keyed by id plus the derived edge list.
///
/// Courses never hold references to each other; relations are plain id
/// lists, and reverse lookups go through the `dependents` index built once
/// at construction.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    courses: HashMap<CourseId, Course>,
    /// Course ids in input order; drives every deterministic iteration.
    order: Vec<CourseId>,
    edges: Vec<Edge>,
    /// prerequisite id -> ids of courses listing it in either list.
    ///
    /// Keys include ids that are not courses of this program.
    dependents: HashMap<CourseId, Vec<CourseId>>,
    skipped: Vec<SkippedRecord>,
}

impl CourseGraph {
    /// Build the graph from parsed records.
    ///
    /// Records without an id or name, and records repeating an earlier id,
    /// are skipped and remembered for diagnostics.
    pub fn build(records: &[CourseRecord]) -> Self {
        let mut graph = Self::default();

        for (index, record) in records.iter().enumerate() {
            match Course::from_record(record) {
                Ok(course) => graph.insert(index, course),
                Err(reason) => graph.skip(index, record.id.clone(), reason),
            }
        }

        graph.finish()
    }

    /// Build the graph from an already-normalised course list.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut graph = Self::default();
        for (index, course) in courses.into_iter().enumerate() {
            graph.insert(index, course);
        }
        graph.finish()
    }

    /// Build the graph from arbitrary JSON.
    ///
    /// Anything other than a list yields an empty graph; list elements that
    /// do not look like course records are skipped.
    pub fn from_json_value(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            warn!("course data is not a list; using an empty program");
            return Self::default();
        };

        let mut graph = Self::default();
        for (index, item) in items.iter().enumerate() {
            if !item.is_object() {
                graph.skip(index, None, SkipReason::NotAnObject);
                continue;
            }
            let record = match <CourseRecord as Deserialize>::deserialize(item) {
                Ok(record) => record,
                Err(err) => {
                    debug!(index, error = %err, "course record has malformed fields");
                    let id = item.get("id").and_then(id_text);
                    graph.skip(index, id, SkipReason::Malformed);
                    continue;
                }
            };
            match Course::from_record(&record) {
                Ok(course) => graph.insert(index, course),
                Err(reason) => graph.skip(index, record.id.clone(), reason),
            }
        }

        graph.finish()
    }

    fn insert(&mut self, index: usize, course: Course) {
        if self.courses.contains_key(&course.id) {
            self.skip(index, Some(course.id), SkipReason::DuplicateId);
            return;
        }
        self.order.push(course.id.clone());
        self.courses.insert(course.id.clone(), course);
    }

    fn skip(&mut self, index: usize, id: Option<CourseId>, reason: SkipReason) {
        warn!(index, id = ?id, %reason, "skipping course record");
        self.skipped.push(SkippedRecord { index, id, reason });
    }

    /// Derive edges and the reverse index once all courses are known.
    fn finish(mut self) -> Self {
        let mut edges = Vec::new();
        let mut seen: HashSet<(CourseId, CourseId, EdgeKind)> = HashSet::new();

        for id in &self.order {
            let Some(course) = self.courses.get(id) else {
                continue;
            };

            for req in &course.exam_reqs {
                if seen.insert((req.clone(), id.clone(), EdgeKind::Exam)) {
                    edges.push(Edge::new(req.clone(), id.clone(), EdgeKind::Exam));
                }
            }

            for req in &course.enroll_reqs {
                // The exam edge already carries the tighter constraint.
                if course.exam_reqs.contains(req) {
                    continue;
                }
                if seen.insert((req.clone(), id.clone(), EdgeKind::Enroll)) {
                    edges.push(Edge::new(req.clone(), id.clone(), EdgeKind::Enroll));
                }
            }

            for req in course.prerequisites() {
                self.dependents
                    .entry(req.clone())
                    .or_default()
                    .push(id.clone());
            }
        }

        debug!(
            courses = self.order.len(),
            edges = edges.len(),
            skipped = self.skipped.len(),
            "built course graph"
        );

        self.edges = edges;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Courses in input order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.order.iter().filter_map(|id| self.courses.get(id))
    }

    /// Course ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Position of a course in the input order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|o| o == id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Immediate dependents: courses naming `id` in either requirement list.
    pub fn dependents_of(&self, id: &str) -> &[CourseId] {
        self.dependents
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate prerequisites of `id` (both kinds, without repeats).
    pub fn dependencies_of(&self, id: &str) -> Vec<&CourseId> {
        self.courses
            .get(id)
            .map(|c| c.prerequisites().collect())
            .unwrap_or_default()
    }

    /// Records dropped while building.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

/// Best-effort id of a record that failed to deserialize; ids may be text
/// or bare numbers.
fn id_text(value: &Value) -> Option<CourseId> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
