//! Input points with stable indices.
//!
//! A point's identity is its position in the `PointStore`. Indices are handed
//! out in insertion order and are never reused or renumbered; points can be
//! moved but never removed.

pub mod rand;
mod store;
mod types;

pub use store::PointStore;
pub use types::{Point, PointId};
