use std::collections::HashMap;

use super::*;
use crate::points::rand::{lattice, near_circle, on_circle, uniform_in_box, Bounds2};
use crate::points::PointStore;
use crate::predicates::orient2;
use crate::quad_edge::Dart;
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

fn run(coords: &[(f64, f64)]) -> (PointStore, Mesh) {
    let store = PointStore::from_coords(coords.iter().copied());
    let mesh = triangulate(&store).expect("valid input");
    (store, mesh)
}

/// Monotone chain over pre-sorted points; drops collinear middle points.
fn half_hull(pts: impl Iterator<Item = Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut h: Vec<Vector2<f64>> = Vec::new();
    for p in pts {
        while h.len() >= 2 && orient2(h[h.len() - 2], h[h.len() - 1], p) <= 0.0 {
            h.pop();
        }
        h.push(p);
    }
    h.pop();
    h
}

/// Points on the closed hull boundary (collinear ones included); `None` when
/// every point lies on one line.
fn hull_boundary_count(coords: &[(f64, f64)]) -> Option<usize> {
    let v: Vec<Vector2<f64>> = coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    let mut pts = v.clone();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let mut hull = half_hull(pts.iter().copied());
    hull.extend(half_hull(pts.iter().rev().copied()));
    if hull.len() < 3 {
        return None;
    }
    let on_edge = |p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>| {
        orient2(a, b, p) == 0.0
            && p.x >= a.x.min(b.x)
            && p.x <= a.x.max(b.x)
            && p.y >= a.y.min(b.y)
            && p.y <= a.y.max(b.y)
    };
    let count = v
        .iter()
        .filter(|&&p| (0..hull.len()).any(|k| on_edge(p, hull[k], hull[(k + 1) % hull.len()])))
        .count();
    Some(count)
}

fn assert_well_formed(store: &PointStore, mesh: &Mesh) {
    let pts = store.points();
    let mut lines = mesh.edge_set();
    let before = lines.len();
    lines.dedup();
    assert_eq!(lines.len(), before, "duplicate line");
    for [a, b] in &mesh.lines {
        assert!(a < b);
    }
    for t in &mesh.triangles {
        assert!(orient2(pts[t[0]].pos(), pts[t[1]].pos(), pts[t[2]].pos()) > 0.0);
        for k in 0..3 {
            let (a, b) = (t[k].min(t[(k + 1) % 3]), t[k].max(t[(k + 1) % 3]));
            assert!(lines.binary_search(&[a, b]).is_ok(), "triangle side missing");
        }
    }
    let mut tris = mesh.triangle_set();
    let before = tris.len();
    tris.dedup();
    assert_eq!(tris.len(), before, "duplicate triangle");
}

#[test]
fn empty_and_single_point() {
    for coords in [vec![], vec![(3.0, 4.0)]] {
        let (_, mesh) = run(&coords);
        assert_eq!(mesh.line_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.point_count, coords.len());
    }
    let store = PointStore::from_coords([(1.0, 1.0)]);
    let tri = Triangulator::new(&store).run().unwrap();
    assert!(tri.hull().is_none());
}

#[test]
fn two_points_one_edge() {
    let store = PointStore::from_coords([(5.0, 0.0), (0.0, 0.0)]);
    let tri = Triangulator::new(&store).run().unwrap();
    let (ldo, rdo) = tri.hull().unwrap();
    assert_eq!(rdo, ldo.sym());
    assert_eq!(tri.arena().org(ldo), 1);
    let mesh = tri.mesh();
    assert_eq!(mesh.lines, vec![[0, 1]]);
    assert!(mesh.triangles.is_empty());
}

#[test]
fn unit_square_two_triangles_one_diagonal() {
    let (store, mesh) = run(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.line_count(), 5);
    let lines = mesh.edge_set();
    for side in [[0, 1], [1, 2], [2, 3], [0, 3]] {
        assert!(lines.contains(&side), "missing side {side:?}");
    }
    let diagonals = lines.iter().filter(|l| **l == [0, 2] || **l == [1, 3]).count();
    assert_eq!(diagonals, 1);
    for t in &mesh.triangles {
        assert!(t.iter().all(|&i| i < 4));
    }
    assert_well_formed(&store, &mesh);
}

#[test]
fn collinear_triple_is_a_chain() {
    let (_, mesh) = run(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(mesh.triangles.is_empty());
    assert_eq!(mesh.edge_set(), vec![[0, 1], [1, 2]]);
}

#[test]
fn collinear_many_is_a_chain() {
    // shuffled along a diagonal line
    let xs = [4.0, 0.0, 6.0, 1.0, 3.0, 2.0, 5.0];
    let coords: Vec<(f64, f64)> = xs.iter().map(|&x| (x, 2.0 * x)).collect();
    let (_, mesh) = run(&coords);
    assert!(mesh.triangles.is_empty());
    assert_eq!(mesh.line_count(), xs.len() - 1);
    let by_x: HashMap<usize, f64> = xs.iter().copied().enumerate().collect();
    for [a, b] in mesh.lines {
        assert_eq!((by_x[&a] - by_x[&b]).abs(), 1.0);
    }
}

#[test]
fn triangle_in_either_orientation() {
    for coords in [
        [(0.0, 0.0), (4.0, 0.0), (1.0, 3.0)],
        [(0.0, 0.0), (1.0, 3.0), (4.0, 0.0)],
        [(0.0, 0.0), (2.0, -3.0), (4.0, 0.0)],
    ] {
        let (store, mesh) = run(&coords);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.line_count(), 3);
        assert_well_formed(&store, &mesh);
    }
}

#[test]
fn hull_darts_start_at_extreme_points() {
    let coords = uniform_in_box(50, Bounds2::new(100.0, 100.0), 3);
    let store = PointStore::from_coords(coords.iter().copied());
    let tri = Triangulator::new(&store).run().unwrap();
    let order = Triangulator::new(&store).sorted_indices().unwrap();
    let (ldo, rdo) = tri.hull().unwrap();
    assert_eq!(tri.arena().org(ldo), order[0]);
    assert_eq!(tri.arena().org(rdo), order[order.len() - 1]);
}

#[test]
fn rejects_duplicates_and_non_finite() {
    let store = PointStore::from_coords([(1.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
    assert_eq!(
        triangulate(&store),
        Err(InvalidInput::DuplicatePoint { first: 0, second: 2 })
    );
    let store = PointStore::from_coords([(0.0, 5.0), (-0.0, 5.0), (0.0, 1.0)]);
    assert!(matches!(
        triangulate(&store),
        Err(InvalidInput::DuplicatePoint { .. })
    ));
    let store = PointStore::from_coords([(1.0, 1.0), (f64::NAN, 2.0)]);
    assert_eq!(triangulate(&store), Err(InvalidInput::NonFinite { index: 1 }));
    let store = PointStore::from_coords([(f64::INFINITY, 1.0)]);
    assert!(triangulate(&store).is_err());
    assert!(InvalidInput::NonFinite { index: 3 }.to_string().contains('3'));
}

#[test]
fn convex_position_gives_n_minus_two() {
    // parabola y = x²: convex position, no four points cocircular, exact
    let mut coords: Vec<(f64, f64)> = (0..20).map(|k| (k as f64, (k * k) as f64)).collect();
    coords.shuffle(&mut StdRng::seed_from_u64(17));
    let (store, mesh) = run(&coords);
    assert_eq!(mesh.triangle_count(), coords.len() - 2);
    assert_eq!(mesh.line_count(), 2 * coords.len() - 3);
    assert_well_formed(&store, &mesh);
    assert!(mesh.delaunay_violations(&store).is_empty());
}

#[test]
fn random_cloud_is_delaunay() {
    for seed in 0..4 {
        let coords = uniform_in_box(300, Bounds2::new(1000.0, 1000.0), seed);
        let (store, mesh) = run(&coords);
        let n = coords.len();
        let h = hull_boundary_count(&coords).unwrap();
        assert_eq!(mesh.triangle_count(), 2 * n - 2 - h);
        assert_eq!(mesh.line_count(), 3 * n - 3 - h);
        assert_well_formed(&store, &mesh);
        assert!(mesh.delaunay_violations(&store).is_empty());
    }
}

#[test]
fn rerun_is_idempotent() {
    let coords = uniform_in_box(120, Bounds2::new(50.0, 50.0), 8);
    let store = PointStore::from_coords(coords.iter().copied());
    let a = triangulate(&store).unwrap();
    let b = triangulate(&store).unwrap();
    assert_eq!(a.edge_set(), b.edge_set());
    assert_eq!(a.triangle_set(), b.triangle_set());
}

#[test]
fn insertion_order_does_not_change_geometry() {
    let coords = uniform_in_box(80, Bounds2::new(10.0, 10.0), 21);
    let mut shuffled = coords.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(4));
    let key = |c: &[(f64, f64)], i: usize| (c[i].0.to_bits(), c[i].1.to_bits());
    let geometric = |c: &[(f64, f64)]| {
        let (_, mesh) = run(c);
        let mut tris: Vec<Vec<(u64, u64)>> = mesh
            .triangles
            .iter()
            .map(|t| {
                let mut v: Vec<(u64, u64)> = t.iter().map(|&i| key(c, i)).collect();
                v.sort_unstable();
                v
            })
            .collect();
        tris.sort_unstable();
        tris
    };
    assert_eq!(geometric(&coords), geometric(&shuffled));
}

#[test]
fn arena_rings_stay_closed() {
    let coords = lattice(60, 12, 5);
    let store = PointStore::from_coords(coords.iter().copied());
    let tri = Triangulator::new(&store).run().unwrap();
    let arena = tri.arena();
    let live: Vec<Dart> = arena.edges().collect();
    assert_eq!(live.len(), tri.mesh().line_count());
    for e in live {
        for d in [e, e.sym()] {
            let org = arena.org(d);
            assert!(arena.ring(d).all(|r| arena.org(r) == org));
            assert_eq!(arena.onext(arena.onext(d.rot()).rot()), d);
        }
    }
}

#[test]
fn flat_buffers_match_lists() {
    let (_, mesh) = run(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let li = mesh.line_indices();
    let ti = mesh.triangle_indices();
    assert_eq!(li.len(), 2 * mesh.line_count());
    assert_eq!(ti.len(), 3 * mesh.triangle_count());
    assert_eq!(li[0] as usize, mesh.lines[0][0]);
    assert_eq!(ti[5] as usize, mesh.triangles[1][2]);
}

#[test]
fn merge_levels_follow_midpoint_split() {
    let levels = |n: usize| {
        let store = PointStore::from_coords(lattice(n, 64, 5));
        Triangulator::new(&store).run().unwrap().merge_levels()
    };
    for (n, want) in [(0, 0), (1, 0), (2, 0), (3, 0), (4, 1), (6, 1), (7, 2), (12, 2), (13, 3)] {
        assert_eq!(levels(n), want, "n = {n}");
    }
    // 1000 -> 500 -> 250 -> 125 -> 63 -> 32 -> 16 -> 8 -> 4 -> 2
    assert_eq!(levels(1000), 9);
}

#[test]
fn exact_cocircular_points_give_n_minus_two() {
    // the twelve integer points on x² + y² = 25: in-circle is exactly 0
    let mut coords = vec![(5.0, 0.0), (-5.0, 0.0), (0.0, 5.0), (0.0, -5.0)];
    for (a, b) in [(3.0, 4.0), (4.0, 3.0)] {
        for (sx, sy) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
            coords.push((sx * a, sy * b));
        }
    }
    coords.shuffle(&mut StdRng::seed_from_u64(2));
    let (store, mesh) = run(&coords);
    assert_eq!(mesh.triangle_count(), 10);
    assert_eq!(mesh.line_count(), 21);
    assert_well_formed(&store, &mesh);
    assert!(mesh.delaunay_violations(&store).is_empty());
}

#[test]
fn rounded_circle_points_lose_faces_without_failing() {
    // plain f64 in-circle on nearly cocircular input: no error, but the
    // exported mesh is not a full triangulation of the set
    for n in [16, 1000] {
        let coords = on_circle(n, 1.0, 7);
        let store = PointStore::from_coords(coords);
        let mesh = triangulate(&store).unwrap();
        assert!(mesh.triangle_count() <= n - 2);
        assert_eq!(mesh.point_count, n);
    }
}

#[test]
fn jittered_ring_is_delaunay() {
    let coords = near_circle(400, 500.0, 0.05, 9);
    let (store, mesh) = run(&coords);
    let n = coords.len();
    let h = hull_boundary_count(&coords).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * n - 2 - h);
    assert_well_formed(&store, &mesh);
    assert!(mesh.delaunay_violations(&store).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn lattice_sets_obey_count_laws(
        set in prop::collection::hash_set((0i32..40, 0i32..40), 0..60)
    ) {
        let coords: Vec<(f64, f64)> = set.into_iter().map(|(x, y)| (x as f64, y as f64)).collect();
        let (store, mesh) = run(&coords);
        let n = coords.len();
        match hull_boundary_count(&coords) {
            Some(h) => {
                prop_assert_eq!(mesh.triangle_count(), 2 * n - 2 - h);
                prop_assert_eq!(mesh.line_count(), 3 * n - 3 - h);
            }
            None => {
                prop_assert_eq!(mesh.triangle_count(), 0);
                prop_assert_eq!(mesh.line_count(), n.saturating_sub(1));
            }
        }
        assert_well_formed(&store, &mesh);
        prop_assert!(mesh.delaunay_violations(&store).is_empty());
    }

    #[test]
    fn lattice_rerun_same_sets(
        set in prop::collection::hash_set((0i32..25, 0i32..25), 3..40)
    ) {
        let coords: Vec<(f64, f64)> = set.into_iter().map(|(x, y)| (x as f64, y as f64)).collect();
        let store = PointStore::from_coords(coords);
        let a = triangulate(&store).unwrap();
        let b = triangulate(&store).unwrap();
        prop_assert_eq!(a.edge_set(), b.edge_set());
        prop_assert_eq!(a.triangle_set(), b.triangle_set());
    }
}
