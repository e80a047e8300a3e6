use nalgebra::Vector2;

/// Stable index of a point in its `PointStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

/// One input point.
///
/// `scalar` and `selected` are presentation attributes: the triangulation
/// ignores them but the store keeps and forwards them to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub index: usize,
    /// Tie-break / colouring value in [0, 1), drawn at insertion.
    pub scalar: f64,
    pub selected: bool,
}

impl Point {
    #[inline]
    pub fn id(&self) -> PointId {
        PointId(self.index)
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Inside the axis-aligned box of half-width `radius` around `(x, y)`.
    #[inline]
    pub fn hit(&self, x: f64, y: f64, radius: f64) -> bool {
        (x - self.x).abs() <= radius && (y - self.y).abs() <= radius
    }
}
