#![allow(dead_code, unused_imports)]

pub use pathfinder_test_utils::builders;
pub use pathfinder_test_utils::{completed, init_tracing};

use pathfinder::dag::CourseGraph;

use self::builders::{CourseBuilder, ProgramBuilder};

/// A{}, B{enroll: A}, C{exam: A}
pub fn abc_program() -> CourseGraph {
    ProgramBuilder::new()
        .with_root("A")
        .with_course(CourseBuilder::new("B").enroll("A").build())
        .with_course(CourseBuilder::new("C").exam("A").build())
        .build()
}

/// A -> B -> C -> D, each requiring the previous to enroll.
pub fn chain_program() -> CourseGraph {
    ProgramBuilder::new()
        .with_enroll_chain(&["A", "B", "C", "D"])
        .build()
}
