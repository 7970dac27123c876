// src/dag/course.rs

//! Course records as supplied by the data-loading collaborator, and the
//! normalised [`Course`] the rest of the crate works with.

use serde::{Deserialize, Deserializer};

use crate::types::{CourseId, EdgeKind};

/// A raw course record, close to the JSON the program files contain.
///
/// Every field is optional here; [`Course::from_record`] decides what a
/// usable course needs. Both the English field names and the Spanish ones
/// found in the original program data are accepted:
///
/// ```json
/// { "id": "3", "nombre": "Física I", "posY": 1,
///   "requiere_para_cursar": ["1"], "requiere_para_final": ["1", "2"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRecord {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<CourseId>,

    #[serde(default, alias = "nombre")]
    pub name: Option<String>,

    /// Academic term index (1-based).
    #[serde(default, alias = "nivel", deserialize_with = "de_opt_int")]
    pub level: Option<i64>,

    /// Positional row used by older layouts (0-based); only consulted when
    /// `level` is absent.
    #[serde(default, rename = "posY", deserialize_with = "de_opt_int")]
    pub pos_y: Option<i64>,

    #[serde(
        default,
        rename = "enrollReqs",
        alias = "enroll_reqs",
        alias = "requiere_para_cursar",
        deserialize_with = "de_ids"
    )]
    pub enroll_reqs: Vec<CourseId>,

    #[serde(
        default,
        rename = "examReqs",
        alias = "exam_reqs",
        alias = "requiere_para_final",
        deserialize_with = "de_ids"
    )]
    pub exam_reqs: Vec<CourseId>,
}

impl CourseRecord {
    pub fn new(id: impl Into<CourseId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Why a record could not become a [`Course`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingId,
    MissingName,
    DuplicateId,
    NotAnObject,
    Malformed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingId => f.write_str("record has no id"),
            SkipReason::MissingName => f.write_str("record has no name"),
            SkipReason::DuplicateId => f.write_str("id already used by an earlier record"),
            SkipReason::NotAnObject => f.write_str("record is not a course object"),
            SkipReason::Malformed => f.write_str("record has fields of the wrong type"),
        }
    }
}

/// A course of the currently selected program. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub level: u32,
    /// Ids required to enroll, in declaration order.
    pub enroll_reqs: Vec<CourseId>,
    /// Ids required to sit the exam, in declaration order.
    pub exam_reqs: Vec<CourseId>,
}

impl Course {
    pub fn new(id: impl Into<CourseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: 1,
            enroll_reqs: Vec::new(),
            exam_reqs: Vec::new(),
        }
    }

    /// Normalise a raw record.
    ///
    /// Missing requirement lists are empty. The level comes from `level`,
    /// then `posY + 1`, then defaults to 1; anything below 1 is clamped.
    pub fn from_record(record: &CourseRecord) -> Result<Self, SkipReason> {
        let id = record
            .id
            .as_ref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(SkipReason::MissingId)?;
        let name = record.name.as_ref().ok_or(SkipReason::MissingName)?;

        let level = record
            .level
            .or_else(|| record.pos_y.map(|y| y.saturating_add(1)))
            .unwrap_or(1)
            .clamp(1, i64::from(u32::MAX));

        Ok(Self {
            id: id.clone(),
            name: name.clone(),
            level: u32::try_from(level).unwrap_or(1),
            enroll_reqs: dedup_in_order(&record.enroll_reqs),
            exam_reqs: dedup_in_order(&record.exam_reqs),
        })
    }

    /// Requirement list of the given kind.
    pub fn reqs(&self, kind: EdgeKind) -> &[CourseId] {
        match kind {
            EdgeKind::Enroll => &self.enroll_reqs,
            EdgeKind::Exam => &self.exam_reqs,
        }
    }

    /// Every prerequisite id, enroll list first, without repeats.
    pub fn prerequisites(&self) -> impl Iterator<Item = &CourseId> {
        self.enroll_reqs.iter().chain(
            self.exam_reqs
                .iter()
                .filter(|id| !self.enroll_reqs.contains(id)),
        )
    }

    /// Whether `id` appears in either requirement list.
    pub fn depends_on(&self, id: &str) -> bool {
        self.enroll_reqs.iter().any(|r| r == id) || self.exam_reqs.iter().any(|r| r == id)
    }
}

fn dedup_in_order(ids: &[CourseId]) -> Vec<CourseId> {
    let mut out: Vec<CourseId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}

/// Ids may be written as strings or bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for CourseId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Int(i64),
    Float(f64),
    Text(String),
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<CourseId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(CourseId::from))
}

fn de_ids<'de, D>(deserializer: D) -> Result<Vec<CourseId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawId>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(CourseId::from)
        .collect())
}

fn de_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawInt>::deserialize(deserializer)?;
    Ok(raw.and_then(|r| match r {
        RawInt::Int(i) => Some(i),
        RawInt::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        RawInt::Float(_) => None,
        RawInt::Text(s) => s.trim().parse().ok(),
    }))
}
