#![allow(dead_code)]

use pathfinder::dag::{Course, CourseGraph};
use serde_json::{Value, json};

/// Builder for a program's course list, producing a [`CourseGraph`] or the
/// raw JSON a data file would contain.
pub struct ProgramBuilder {
    courses: Vec<Course>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self { courses: Vec::new() }
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Shorthand for a course named after its id with no requirements.
    pub fn with_root(self, id: &str) -> Self {
        self.with_course(CourseBuilder::new(id).build())
    }

    /// `ids[i]` requires `ids[i - 1]` to enroll.
    pub fn with_enroll_chain(mut self, ids: &[&str]) -> Self {
        for (i, id) in ids.iter().enumerate() {
            let mut b = CourseBuilder::new(id).level(i as u32 + 1);
            if i > 0 {
                b = b.enroll(ids[i - 1]);
            }
            self.courses.push(b.build());
        }
        self
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn build(self) -> CourseGraph {
        CourseGraph::from_courses(self.courses)
    }

    /// The course list as program-file JSON (English field names).
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.courses
                .iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "name": c.name,
                        "level": c.level,
                        "enrollReqs": c.enroll_reqs,
                        "examReqs": c.exam_reqs,
                    })
                })
                .collect(),
        )
    }
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Course`].
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            course: Course::new(id, format!("Course {id}")),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.course.name = name.to_string();
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.course.level = level;
        self
    }

    pub fn enroll(mut self, req: &str) -> Self {
        self.course.enroll_reqs.push(req.to_string());
        self
    }

    pub fn exam(mut self, req: &str) -> Self {
        self.course.exam_reqs.push(req.to_string());
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}
