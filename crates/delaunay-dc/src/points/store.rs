use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, PointId};

/// Ordered collection of input points.
///
/// Insertion is O(1) amortized. There is no removal; indices stay stable.
#[derive(Clone, Debug)]
pub struct PointStore {
    points: Vec<Point>,
    rng: StdRng,
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PointStore {
    /// Empty store; `seed` drives the presentation scalar of new points.
    pub fn new(seed: u64) -> Self {
        Self {
            points: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Store filled with `coords` in order (index `k` ↔ `coords[k]`).
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut store = Self::default();
        for (x, y) in coords {
            store.add_point(x, y);
        }
        store
    }

    /// Append a point with the next free index. New points start selected.
    pub fn add_point(&mut self, x: f64, y: f64) -> Point {
        let point = Point {
            x,
            y,
            index: self.points.len(),
            scalar: self.rng.gen::<f64>(),
            selected: true,
        };
        self.points.push(point);
        point
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Move a point; returns its previous position.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> Option<(f64, f64)> {
        let p = self.points.get_mut(id.0)?;
        let old = (p.x, p.y);
        p.x = x;
        p.y = y;
        Some(old)
    }

    pub fn set_selected(&mut self, id: PointId, selected: bool) -> bool {
        match self.points.get_mut(id.0) {
            Some(p) => {
                p.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
    }

    /// Lowest-index point whose pick box of half-width `radius` contains `(x, y)`.
    pub fn pick(&self, x: f64, y: f64, radius: f64) -> Option<PointId> {
        self.points
            .iter()
            .find(|p| p.hit(x, y, radius))
            .map(Point::id)
    }

    /// A point other than `except` sitting exactly at `(x, y)`.
    pub fn find_coincident(&self, x: f64, y: f64, except: Option<PointId>) -> Option<PointId> {
        self.points
            .iter()
            .filter(|p| Some(p.id()) != except)
            .find(|p| p.x == x && p.y == y)
            .map(Point::id)
    }

    /// Interleaved `(x, y, scalar, selected)` per point, ready for a vertex buffer.
    pub fn attribute_buffer(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.points.len() * 4);
        for p in &self.points {
            out.push(p.x as f32);
            out.push(p.y as f32);
            out.push(p.scalar as f32);
            out.push(if p.selected { 1.0 } else { 0.0 });
        }
        out
    }
}
