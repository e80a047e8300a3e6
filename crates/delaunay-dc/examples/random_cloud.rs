//! Triangulate a few seeded point clouds and print their counts.
//!
//! Usage:
//!   cargo run -p delaunay-dc --example random_cloud -- 500
//!
//! For each seed prints (points, lines, triangles) and the number of
//! circumcircle violations found by the brute-force check.

use delaunay_dc::points::rand::{uniform_in_box, Bounds2};
use delaunay_dc::{triangulate, PointStore};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(200);
    for seed in 0..5u64 {
        let coords = uniform_in_box(count, Bounds2::new(800.0, 600.0), seed);
        let store = PointStore::from_coords(coords);
        match triangulate(&store) {
            Ok(mesh) => println!(
                "seed {seed}: points={}, lines={}, triangles={}, violations={}",
                mesh.point_count,
                mesh.line_count(),
                mesh.triangle_count(),
                mesh.delaunay_violations(&store).len()
            ),
            Err(e) => eprintln!("seed {seed}: {e}"),
        }
    }
}
