// src/engine/mod.rs

//! Pipeline from a course graph and completed set to renderer output.
//!
//! - [`view`] derives the edge subset for a [`crate::types::ViewMode`].
//! - [`focus`] narrows the visible edges to one course's neighbourhood.
//! - [`session`] is the pure state holder that applies user actions.
//! - [`snapshot`] is the annotated output handed to a renderer.

pub mod focus;
pub mod session;
pub mod snapshot;
pub mod view;

pub use focus::Focus;
pub use session::{Session, ToggleOutcome};
pub use snapshot::{CourseView, Progress, Snapshot};
pub use view::{critical_edges, filter_edges, filter_edges_with_path};
