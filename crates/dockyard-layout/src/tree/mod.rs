mod shape;
mod traversal;
mod types;

pub use shape::ShapeIssue;
pub use types::*;
