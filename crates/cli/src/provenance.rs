use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<stem>.provenance.json` next to `artifact`: code revision, crate
/// version, the parameters that produced it, and the artifact path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": delaunay_dc::VERSION,
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let base = Path::new("/tmp/out/mesh.json");
        assert_eq!(sidecar_path(base), Path::new("/tmp/out/mesh.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("points.json");
        fs::write(&artifact, "[]").unwrap();
        let path = write_sidecar(&artifact, json!({"seed": 7})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["version"], delaunay_dc::VERSION);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
