//! JSON file formats: point lists in, meshes out.

use anyhow::{Context, Result};
use delaunay_dc::{Mesh, PointStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `{ "points": n, "lines": [[i, j], ..], "triangles": [[a, b, c], ..] }`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MeshFile {
    pub points: usize,
    pub lines: Vec<[usize; 2]>,
    pub triangles: Vec<[usize; 3]>,
}

impl From<Mesh> for MeshFile {
    fn from(mesh: Mesh) -> Self {
        Self {
            points: mesh.point_count,
            lines: mesh.lines,
            triangles: mesh.triangles,
        }
    }
}

/// Read a JSON array of `[x, y]` pairs; index `k` is the `k`-th pair.
pub fn read_points(path: &Path) -> Result<PointStore> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let coords: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ..]", path.display()))?;
    Ok(PointStore::from_coords(coords.into_iter().map(|[x, y]| (x, y))))
}

pub fn write_points(path: &Path, coords: &[(f64, f64)]) -> Result<()> {
    let pairs: Vec<[f64; 2]> = coords.iter().map(|&(x, y)| [x, y]).collect();
    write_json(path, &pairs)
}

/// Pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
