//! Curated internal API (UNSTABLE).
//!
//! A flat convenience surface for the CLI, benches and demos. Breaking changes
//! are allowed; the module paths stay authoritative.

// Points and generators
pub use crate::points::rand::{
    lattice, near_circle, on_circle, uniform_in_box, Bounds2 as Bounds2D,
};
pub use crate::points::{Point, PointId, PointStore};
// Predicates
pub use crate::predicates::{ccw, circumcircle, in_circle, in_circle_det, orient2};
// Quad-edge topology
pub use crate::quad_edge::{Dart, QuadEdgeArena, Ring};
// Triangulation and export
pub use crate::triangulate::{triangulate, InvalidInput, Mesh, Triangulation, Triangulator};
// Interactive scene
pub use crate::scene::{PointSet, SceneCfg, SceneError};
