//! Flatten a finished quad-edge mesh into renderer-ready index lists.

use std::collections::HashSet;

use crate::cfg::CIRCLE_REL_EPS;
use crate::points::PointStore;
use crate::predicates::{ccw, circumcircle};
use crate::quad_edge::Dart;

use super::divide::Triangulation;

/// Deduplicated undirected edges and counterclockwise triangles.
///
/// Vertex indices refer to the `PointStore` the mesh was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mesh {
    pub point_count: usize,
    /// One entry per undirected edge, stored as `[lo, hi]`.
    pub lines: Vec<[usize; 2]>,
    /// One entry per face, oriented so that `ccw` holds.
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flat line index buffer, two indices per line.
    pub fn line_indices(&self) -> Vec<u32> {
        self.lines.iter().flatten().map(|&i| i as u32).collect()
    }

    /// Flat triangle index buffer, three indices per triangle.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().map(|&i| i as u32).collect()
    }

    /// Undirected edges as a sorted set, independent of traversal order.
    pub fn edge_set(&self) -> Vec<[usize; 2]> {
        let mut out = self.lines.clone();
        out.sort_unstable();
        out
    }

    /// Triangles rotated to start at their lowest index (orientation kept), sorted.
    pub fn triangle_set(&self) -> Vec<[usize; 3]> {
        let mut out: Vec<[usize; 3]> = self
            .triangles
            .iter()
            .map(|t| {
                let k = (0..3).min_by_key(|&k| t[k]).unwrap_or(0);
                [t[k], t[(k + 1) % 3], t[(k + 2) % 3]]
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Brute-force check: `(triangle, point)` pairs where the point lies inside
    /// the triangle's circumcircle by more than a relative `1e-9` slack.
    pub fn delaunay_violations(&self, store: &PointStore) -> Vec<(usize, usize)> {
        let pts = store.points();
        let mut out = Vec::new();
        for (t, tri) in self.triangles.iter().enumerate() {
            let Some((center, r2)) =
                circumcircle(pts[tri[0]].pos(), pts[tri[1]].pos(), pts[tri[2]].pos())
            else {
                continue;
            };
            for p in pts {
                if tri.contains(&p.index) {
                    continue;
                }
                if (p.pos() - center).norm_squared() < r2 * (1.0 - CIRCLE_REL_EPS) {
                    out.push((t, p.index));
                }
            }
        }
        out
    }
}

impl Triangulation {
    /// Depth-first walk over every dart reachable from the hull.
    ///
    /// Each undirected edge is emitted once, from the dart whose origin index
    /// is smaller. A dart's left face is emitted as a triangle when it closes
    /// after three `lnext` steps and is strictly counterclockwise; the hull
    /// face and collinear chains never qualify.
    pub fn mesh(&self) -> Mesh {
        let n = self.pos.len();
        let mut mesh = Mesh {
            point_count: n,
            ..Mesh::default()
        };
        let Some((start, _)) = self.hull else {
            return mesh;
        };

        let arena = &self.arena;
        let mut visited = vec![false; arena.dart_count()];
        let mut seen_tri: HashSet<u128> = HashSet::new();
        let mut stack: Vec<Dart> = vec![start];

        while let Some(e) = stack.pop() {
            if visited[e.id()] {
                continue;
            }
            visited[e.id()] = true;

            let (a, b) = (arena.org(e), arena.dest(e));
            if a < b {
                mesh.lines.push([a, b]);

                let next = arena.lnext(e);
                let c = arena.dest(next);
                let closes = arena.lnext(arena.lnext(next)) == e;
                if closes && ccw(self.pos[a], self.pos[b], self.pos[c]) {
                    let mut key = [a, b, c];
                    key.sort_unstable();
                    let n = n as u128;
                    let id = key[0] as u128 * n * n + key[1] as u128 * n + key[2] as u128;
                    if seen_tri.insert(id) {
                        mesh.triangles.push([a, b, c]);
                    }
                }
            }

            for next in [arena.lnext(e), arena.rnext(e), arena.onext(e), arena.dnext(e)] {
                if !visited[next.id()] {
                    stack.push(next);
                }
            }
        }

        tracing::debug!(
            points = n,
            lines = mesh.lines.len(),
            triangles = mesh.triangles.len(),
            "exported"
        );
        mesh
    }
}
