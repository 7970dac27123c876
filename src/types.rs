use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Canonical course identifier used throughout the crate.
pub type CourseId = String;

/// Ids of the courses a student has fully finished.
///
/// Ordered so that persisted files and printed output are stable.
pub type CompletedSet = BTreeSet<CourseId>;

/// Which prerequisite list an edge was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Source must be completed before the target can be enrolled in.
    Enroll,
    /// Source must be completed before the target's exam can be taken.
    Exam,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Enroll => f.write_str("enroll"),
            EdgeKind::Exam => f.write_str("exam"),
        }
    }
}

/// Eligibility of a single course against a completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseState {
    Approved,
    Available,
    Blocked,
}

impl CourseState {
    /// Approved and Available courses are the ones a student can act on.
    pub fn is_actionable(self) -> bool {
        matches!(self, CourseState::Approved | CourseState::Available)
    }
}

impl fmt::Display for CourseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseState::Approved => f.write_str("approved"),
            CourseState::Available => f.write_str("available"),
            CourseState::Blocked => f.write_str("blocked"),
        }
    }
}

/// Named edge filter exposed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    All,
    EnrollOnly,
    ExamOnly,
    Simplified,
    Critical,
}

impl ViewMode {
    pub const ALL: [ViewMode; 5] = [
        ViewMode::All,
        ViewMode::EnrollOnly,
        ViewMode::ExamOnly,
        ViewMode::Simplified,
        ViewMode::Critical,
    ];

    /// Parse a mode string coming from a UI collaborator.
    ///
    /// Unrecognised values fall back to [`ViewMode::All`] instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(mode = %s, error = %err, "unrecognised view mode; falling back to all");
            ViewMode::All
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::All => "all",
            ViewMode::EnrollOnly => "enrollOnly",
            ViewMode::ExamOnly => "examOnly",
            ViewMode::Simplified => "simplified",
            ViewMode::Critical => "critical",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    /// Accepts the camelCase names, their kebab/snake spellings and the
    /// Spanish labels used by the original program data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalised.as_str() {
            "all" | "todas" => Ok(ViewMode::All),
            "enrollonly" | "enroll" | "cursar" => Ok(ViewMode::EnrollOnly),
            "examonly" | "exam" | "final" => Ok(ViewMode::ExamOnly),
            "simplified" | "simplificada" => Ok(ViewMode::Simplified),
            "critical" | "critica" => Ok(ViewMode::Critical),
            other => Err(format!(
                "invalid view mode: {other} (expected one of all, enrollOnly, examOnly, simplified, critical)"
            )),
        }
    }
}

/// Where the CLI keeps completed sets between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStorageMode {
    /// One JSON file per program under the configured progress directory.
    #[default]
    File,
    /// Process memory only (nothing survives the invocation).
    Memory,
}
