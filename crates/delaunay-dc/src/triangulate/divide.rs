//! Recursive split and merge over a sorted index sequence.

use nalgebra::Vector2;

use crate::points::PointStore;
use crate::predicates::{ccw, in_circle, left_of, right_of};
use crate::quad_edge::{Dart, QuadEdgeArena};

use super::error::InvalidInput;
use super::export::Mesh;

/// Triangulate `store` and export the result in one call.
pub fn triangulate(store: &PointStore) -> Result<Mesh, InvalidInput> {
    Ok(Triangulator::new(store).run()?.mesh())
}

/// Finished quad-edge mesh plus the two outermost hull darts.
///
/// `hull` is `(ldo, rdo)`: `ldo` leaves the leftmost point counterclockwise
/// around the hull, `rdo` leaves the rightmost point clockwise. It is `None`
/// for fewer than two points.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub(crate) arena: QuadEdgeArena,
    pub(crate) pos: Vec<Vector2<f64>>,
    pub(crate) hull: Option<(Dart, Dart)>,
    pub(crate) merge_levels: usize,
}

impl Triangulation {
    #[inline]
    pub fn arena(&self) -> &QuadEdgeArena {
        &self.arena
    }

    #[inline]
    pub fn hull(&self) -> Option<(Dart, Dart)> {
        self.hull
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.pos.len()
    }

    /// Depth of the merge tree: 0 for fewer than four points.
    #[inline]
    pub fn merge_levels(&self) -> usize {
        self.merge_levels
    }
}

/// One triangulation run: owns the arena it builds, borrows the points.
pub struct Triangulator<'a> {
    store: &'a PointStore,
    pos: Vec<Vector2<f64>>,
    arena: QuadEdgeArena,
    merge_levels: usize,
}

impl<'a> Triangulator<'a> {
    pub fn new(store: &'a PointStore) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 so `total_cmp` ordering agrees with `==`
        let pos: Vec<Vector2<f64>> = store
            .points()
            .iter()
            .map(|p| Vector2::new(p.x + 0.0, p.y + 0.0))
            .collect();
        // at most 3n - 3 edges survive; merges create and delete extra ones
        let arena = QuadEdgeArena::with_capacity(4 * pos.len());
        Self {
            store,
            pos,
            arena,
            merge_levels: 0,
        }
    }

    /// Point indices sorted by `(x, y)`, after rejecting invalid input.
    pub fn sorted_indices(&self) -> Result<Vec<usize>, InvalidInput> {
        if let Some(p) = self.store.points().iter().find(|p| !p.is_finite()) {
            return Err(InvalidInput::NonFinite { index: p.index });
        }
        let pos = &self.pos;
        let mut order: Vec<usize> = (0..pos.len()).collect();
        order.sort_by(|&i, &j| {
            pos[i]
                .x
                .total_cmp(&pos[j].x)
                .then_with(|| pos[i].y.total_cmp(&pos[j].y))
        });
        for w in order.windows(2) {
            if pos[w[0]] == pos[w[1]] {
                return Err(InvalidInput::DuplicatePoint {
                    first: w[0].min(w[1]),
                    second: w[0].max(w[1]),
                });
            }
        }
        Ok(order)
    }

    /// Build the Delaunay quad-edge mesh.
    pub fn run(mut self) -> Result<Triangulation, InvalidInput> {
        let order = self.sorted_indices()?;
        let hull = (order.len() >= 2).then(|| self.divide(&order, 0));
        tracing::debug!(
            points = self.pos.len(),
            edges = self.arena.live_edge_count(),
            created = self.arena.quad_count(),
            merge_levels = self.merge_levels,
            "triangulated"
        );
        Ok(Triangulation {
            arena: self.arena,
            pos: self.pos,
            hull,
            merge_levels: self.merge_levels,
        })
    }

    #[inline]
    fn org_pos(&self, e: Dart) -> Vector2<f64> {
        self.pos[self.arena.org(e)]
    }

    #[inline]
    fn dest_pos(&self, e: Dart) -> Vector2<f64> {
        self.pos[self.arena.dest(e)]
    }

    #[inline]
    fn right_of(&self, p: Vector2<f64>, e: Dart) -> bool {
        right_of(p, e, &self.arena, &self.pos)
    }

    #[inline]
    fn left_of(&self, p: Vector2<f64>, e: Dart) -> bool {
        left_of(p, e, &self.arena, &self.pos)
    }

    fn edge(&mut self, from: usize, to: usize) -> Dart {
        let e = self.arena.make_edge();
        self.arena.set_org(e, from);
        self.arena.set_dest(e, to);
        e
    }

    /// Triangulate the sorted slice `s` (at least two points); returns `(ldo, rdo)`.
    ///
    /// Halves of a slice with four or more points hold at least two points
    /// each, so the recursion never reaches an empty or single-point slice.
    fn divide(&mut self, s: &[usize], depth: usize) -> (Dart, Dart) {
        debug_assert!(s.len() >= 2);
        match s.len() {
            2 => {
                let a = self.edge(s[0], s[1]);
                (a, a.sym())
            }
            3 => self.triangle(s[0], s[1], s[2]),
            n => {
                let (left, right) = s.split_at(n / 2);
                let l = self.divide(left, depth + 1);
                let r = self.divide(right, depth + 1);
                self.merge_levels = self.merge_levels.max(depth + 1);
                tracing::trace!(depth, left = left.len(), right = right.len(), "merge");
                self.merge(l, r)
            }
        }
    }

    /// Three sorted points: a triangle, or a two-edge chain when collinear.
    fn triangle(&mut self, s1: usize, s2: usize, s3: usize) -> (Dart, Dart) {
        let a = self.edge(s1, s2);
        let b = self.edge(s2, s3);
        self.arena.splice(a.sym(), b);
        let (p1, p2, p3) = (self.pos[s1], self.pos[s2], self.pos[s3]);
        if ccw(p1, p2, p3) {
            self.arena.connect(b, a);
            (a, b.sym())
        } else if ccw(p1, p3, p2) {
            let c = self.arena.connect(b, a);
            (c.sym(), c)
        } else {
            (a, b.sym())
        }
    }

    /// Stitch two adjacent sub-triangulations along their common tangents.
    fn merge(
        &mut self,
        (mut ldo, mut ldi): (Dart, Dart),
        (mut rdi, mut rdo): (Dart, Dart),
    ) -> (Dart, Dart) {
        // lower common tangent
        loop {
            if self.left_of(self.org_pos(rdi), ldi) {
                ldi = self.arena.lnext(ldi);
            } else if self.right_of(self.org_pos(ldi), rdi) {
                rdi = self.arena.rprev(rdi);
            } else {
                break;
            }
        }

        let mut basel = self.arena.connect(rdi.sym(), ldi);
        if self.arena.org(ldi) == self.arena.org(ldo) {
            ldo = basel.sym();
        }
        if self.arena.org(rdi) == self.arena.org(rdo) {
            rdo = basel;
        }

        loop {
            let mut lcand = self.arena.onext(basel.sym());
            if self.valid(lcand, basel) {
                while in_circle(
                    self.dest_pos(basel),
                    self.org_pos(basel),
                    self.dest_pos(lcand),
                    self.dest_pos(self.arena.onext(lcand)),
                ) {
                    let t = self.arena.onext(lcand);
                    self.arena.delete(lcand);
                    lcand = t;
                }
            }

            let mut rcand = self.arena.oprev(basel);
            if self.valid(rcand, basel) {
                while in_circle(
                    self.dest_pos(basel),
                    self.org_pos(basel),
                    self.dest_pos(rcand),
                    self.dest_pos(self.arena.oprev(rcand)),
                ) {
                    let t = self.arena.oprev(rcand);
                    self.arena.delete(rcand);
                    rcand = t;
                }
            }

            let l_ok = self.valid(lcand, basel);
            let r_ok = self.valid(rcand, basel);
            if !l_ok && !r_ok {
                break;
            }
            let take_right = !l_ok
                || (r_ok
                    && in_circle(
                        self.dest_pos(lcand),
                        self.org_pos(lcand),
                        self.org_pos(rcand),
                        self.dest_pos(rcand),
                    ));
            basel = if take_right {
                self.arena.connect(rcand, basel.sym())
            } else {
                self.arena.connect(basel.sym(), lcand.sym())
            };
        }

        (ldo, rdo)
    }

    /// Candidate `e` still lies above the base edge.
    #[inline]
    fn valid(&self, e: Dart, basel: Dart) -> bool {
        self.right_of(self.dest_pos(e), basel)
    }
}
