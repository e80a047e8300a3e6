//! Planar Delaunay triangulation on a quad-edge mesh.
//!
//! Pipeline: `PointStore` → sorted index sequence → `Triangulator`
//! (divide & conquer over a `QuadEdgeArena`, Guibas–Stolfi) → `Triangulation`
//! → `Mesh` (deduplicated line and triangle index lists).
//!
//! The renderer-facing façade is `scene::PointSet`: it owns the points and the
//! last exported mesh and rebuilds the mesh from scratch on every mutation.
//!
//! Numerics
//! - Predicates use plain `f64` arithmetic with no exact-arithmetic fallback.
//!   Near-degenerate inputs (almost collinear or almost cocircular) may be
//!   misclassified; integer coordinates of moderate size are exact.

pub mod api;
mod cfg;
pub mod points;
pub mod predicates;
pub mod quad_edge;
pub mod scene;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use points::{Point, PointId, PointStore};
pub use scene::{PointSet, SceneCfg, SceneError};
pub use triangulate::{triangulate, InvalidInput, Mesh, Triangulation, Triangulator};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::points::{Point, PointId, PointStore};
    pub use crate::predicates::{ccw, in_circle, left_of, right_of};
    pub use crate::quad_edge::{Dart, QuadEdgeArena};
    pub use crate::scene::{PointSet, SceneCfg};
    pub use crate::triangulate::{triangulate, InvalidInput, Mesh};
    pub use nalgebra::Vector2 as Vec2;
}
