//! Seeded point clouds for tests, benches and the CLI.
//!
//! Model
//! - `uniform_in_box`: independent uniform draws in an axis-aligned box.
//! - `on_circle`: sorted random angles on a circle; cocircular up to rounding.
//! - `near_circle`: the same with radial jitter, away from the degenerate case.
//! - `lattice`: integer coordinates without duplicates; exact under `f64`
//!   predicates as long as coordinates stay below ~10^3.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl Bounds2 {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            min: (0.0, 0.0),
            max: (width, height),
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// `count` uniform points inside `bounds`.
pub fn uniform_in_box(count: usize, bounds: Bounds2, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (x0, y0) = bounds.min;
    let (x1, y1) = bounds.max;
    (0..count)
        .map(|_| {
            let x = x0 + rng.gen::<f64>() * (x1 - x0);
            let y = y0 + rng.gen::<f64>() * (y1 - y0);
            (x, y)
        })
        .collect()
}

/// `count` points on the circle of `radius` around the origin, CCW order.
///
/// The points are cocircular only up to `cos`/`sin` rounding, so the plain
/// `f64` in-circle test sees noise of either sign and the resulting mesh is
/// not a triangulation of the whole set. Use `near_circle` for a
/// well-conditioned ring, or integer points on a lattice circle for exact
/// cocircularity.
pub fn on_circle(count: usize, radius: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut angles: Vec<f64> = (0..count)
        .map(|_| rng.gen::<f64>() * std::f64::consts::TAU)
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|t| (radius * t.cos(), radius * t.sin()))
        .collect()
}

/// `count` points in a ring around the origin: sorted random angles, radius
/// scaled by a uniform factor in `[1 - jitter, 1 + jitter)`.
pub fn near_circle(count: usize, radius: f64, jitter: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut polar: Vec<(f64, f64)> = (0..count)
        .map(|_| {
            let t = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = radius * (1.0 + jitter * (2.0 * rng.gen::<f64>() - 1.0));
            (t, r)
        })
        .collect();
    polar.sort_by(|a, b| a.0.total_cmp(&b.0));
    polar
        .into_iter()
        .map(|(t, r)| (r * t.cos(), r * t.sin()))
        .collect()
}

/// Up to `count` distinct integer points in `[0, side)²`.
pub fn lattice(count: usize, side: u32, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = side.max(1);
    let cap = (side as usize) * (side as usize);
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(count.min(cap));
    while out.len() < count.min(cap) {
        let p = (rng.gen_range(0..side), rng.gen_range(0..side));
        if seen.insert(p) {
            out.push((p.0 as f64, p.1 as f64));
        }
    }
    out
}
