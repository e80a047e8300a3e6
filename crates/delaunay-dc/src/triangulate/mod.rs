//! Divide & conquer Delaunay triangulation (Guibas–Stolfi) and mesh export.
//!
//! Purpose
//! - Turn a `PointStore` into a quad-edge mesh satisfying the empty-circumcircle
//!   property, then flatten it into deduplicated line and triangle lists.
//!
//! Model
//! - Input order does not matter: indices are sorted by `(x, y)` internally.
//!   Coincident points and non-finite coordinates are rejected (`InvalidInput`).
//! - The sorted sequence is split at its index midpoint (not a geometric
//!   median); both halves are triangulated recursively and merged by walking
//!   the lower common tangent upward, deleting edges that fail the in-circle
//!   test.
//! - Every call builds a fresh arena; nothing is reused between calls.
//!
//! Complexity
//! - O(n log n) with balanced halves. The positional split keeps the recursion
//!   depth at ⌈log₂ n⌉ but merge cost depends on the point distribution.

mod divide;
mod error;
mod export;

pub use divide::{triangulate, Triangulation, Triangulator};
pub use error::InvalidInput;
pub use export::Mesh;

#[cfg(test)]
mod tests;
