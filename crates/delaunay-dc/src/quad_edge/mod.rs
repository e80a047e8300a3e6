//! Quad-edge topology (Guibas–Stolfi) stored in an index arena.
//!
//! Purpose
//! - Hold the primal/dual edge graph built by the triangulator without cyclic
//!   ownership: every reference is a `Dart` handle into flat tables.
//!
//! Model
//! - A quad-edge is four consecutive darts `4k..4k+3`. Darts `4k` and `4k+2`
//!   are the two directions of the primal edge; `4k+1` and `4k+3` are the dual
//!   pair. `rot`, `sym` and `inv_rot` are index arithmetic on the low two bits.
//! - The only stored link is `onext` (the ring of darts sharing an origin).
//!   Every other navigation function is derived from `rot`, `sym` and `onext`.
//! - The dart index doubles as its unique, monotonically increasing id; deleted
//!   quad-edges stay in the arena (isolated) until the arena is dropped.

mod arena;
mod types;

pub use arena::{QuadEdgeArena, Ring};
pub use types::Dart;
