use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use delaunay_dc::points::rand::{uniform_in_box, Bounds2};
use delaunay_dc::triangulate;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_points, write_json, write_points, MeshFile};

#[derive(Parser)]
#[command(name = "delaunay-cli")]
#[command(about = "Divide-and-conquer Delaunay triangulation of JSON point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a JSON point list and write the mesh
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a seeded uniform point cloud
    Random {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        width: f64,
        #[arg(long, default_value_t = 1.0)]
        height: f64,
    },
    /// Print version and, with --input, mesh counts as JSON
    Report {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, out } => run_triangulate(&input, &out).map(|_| ()),
        Action::Random {
            count,
            seed,
            out,
            width,
            height,
        } => run_random(count, seed, Bounds2::new(width, height), &out),
        Action::Report { input } => {
            let obj = report(input.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&obj)?);
            Ok(())
        }
    }
}

fn run_triangulate(input: &Path, out: &Path) -> Result<MeshFile> {
    tracing::info!(input = %input.display(), out = %out.display(), "triangulate");
    let store = read_points(input)?;
    let mesh = triangulate(&store)
        .with_context(|| format!("triangulating {}", input.display()))?;
    let file = MeshFile::from(mesh);
    write_json(out, &file)?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "command": "triangulate",
            "input": input.to_string_lossy(),
            "points": file.points,
            "lines": file.lines.len(),
            "triangles": file.triangles.len()
        }),
    )?;
    tracing::info!(
        points = file.points,
        lines = file.lines.len(),
        triangles = file.triangles.len(),
        "mesh written"
    );
    Ok(file)
}

fn run_random(count: usize, seed: u64, bounds: Bounds2, out: &Path) -> Result<()> {
    tracing::info!(count, seed, out = %out.display(), "random");
    let coords = uniform_in_box(count, bounds, seed);
    write_points(out, &coords)?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "command": "random",
            "count": count,
            "seed": seed,
            "min": bounds.min,
            "max": bounds.max
        }),
    )?;
    Ok(())
}

fn report(input: Option<&Path>) -> Result<serde_json::Value> {
    let mut obj = serde_json::json!({
        "version": delaunay_dc::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    if let Some(path) = input {
        let store = read_points(path)?;
        let mesh = triangulate(&store)
            .with_context(|| format!("triangulating {}", path.display()))?;
        obj["input"] = serde_json::json!({
            "path": path.to_string_lossy(),
            "points": mesh.point_count,
            "lines": mesh.line_count(),
            "triangles": mesh.triangle_count()
        });
    }
    Ok(obj)
}
