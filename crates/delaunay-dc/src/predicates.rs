//! Orientation and in-circle predicates over raw `f64` coordinates.
//!
//! No exact-arithmetic fallback: near-degenerate inputs may be misclassified
//! by round-off. Integer coordinates with magnitude below ~10^3 keep every
//! intermediate exact, which is what the property tests rely on.

use nalgebra::Vector2;

use crate::quad_edge::{Dart, QuadEdgeArena};

/// Twice the signed area of triangle `(a, b, c)`; positive when counterclockwise.
#[inline]
pub fn orient2(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strictly counterclockwise.
#[inline]
pub fn ccw(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    orient2(a, b, c) > 0.0
}

/// In-circle determinant, translated so that `d` sits at the origin.
///
/// Positive iff `d` lies strictly inside the circumcircle of a CCW `(a, b, c)`.
#[inline]
pub fn in_circle_det(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> f64 {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;
    let a2 = ad.norm_squared();
    let b2 = bd.norm_squared();
    let c2 = cd.norm_squared();
    a2 * (bd.x * cd.y - cd.x * bd.y) + b2 * (cd.x * ad.y - ad.x * cd.y)
        + c2 * (ad.x * bd.y - bd.x * ad.y)
}

/// `d` strictly inside the circumcircle of counterclockwise `(a, b, c)`.
#[inline]
pub fn in_circle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    in_circle_det(a, b, c, d) > 0.0
}

/// Circumcenter and squared radius of `(a, b, c)`; `None` when collinear.
pub fn circumcircle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> Option<(Vector2<f64>, f64)> {
    let d = 2.0 * orient2(a, b, c);
    if d == 0.0 {
        return None;
    }
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let off = Vector2::new((ac.y * ab2 - ab.y * ac2) / d, (ab.x * ac2 - ac.x * ab2) / d);
    Some((a + off, off.norm_squared()))
}

/// `p` strictly right of directed edge `e` (org → dest).
#[inline]
pub fn right_of(p: Vector2<f64>, e: Dart, mesh: &QuadEdgeArena, pts: &[Vector2<f64>]) -> bool {
    ccw(p, pts[mesh.dest(e)], pts[mesh.org(e)])
}

/// `p` strictly left of directed edge `e` (org → dest).
#[inline]
pub fn left_of(p: Vector2<f64>, e: Dart, mesh: &QuadEdgeArena, pts: &[Vector2<f64>]) -> bool {
    ccw(p, pts[mesh.org(e)], pts[mesh.dest(e)])
}
