//! Saving and loading scenes as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use circuitry_background::{CONNECTOR_COUNT, NODE_COUNT, TRACE_COUNT};
use circuitry_core::{CONNECTOR_SAMPLES, ObjectKind, Scene, SceneObject};
use thiserror::Error;

/// Errors raised while saving or loading a scene snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("no data directory for snapshots")]
    NoDataDir,
    #[error("snapshot i/o on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("snapshot {path} has an invalid object at index {index}")]
    InvalidObject { path: PathBuf, index: usize },
    #[error("snapshot {path} has {found} {kind:?} objects, expected {expected}")]
    WrongMembership {
        path: PathBuf,
        kind: ObjectKind,
        expected: usize,
        found: usize,
    },
}

/// Object count every scene has, per kind.
const MEMBERSHIP: [(ObjectKind, usize); 3] = [
    (ObjectKind::Trace, TRACE_COUNT),
    (ObjectKind::DataConnector, CONNECTOR_COUNT),
    (ObjectKind::DeviceNode, NODE_COUNT),
];

/// Directory snapshots are written to.
pub fn snapshot_dir() -> Result<PathBuf, SnapshotError> {
    circuitry_config::Config::project_dirs()
        .map(|dirs| dirs.data_dir().join("scenes"))
        .ok_or(SnapshotError::NoDataDir)
}

/// Write the scene into `dir` under a timestamped name and return the path.
pub fn save_scene(scene: &Scene, dir: &Path) -> Result<PathBuf, SnapshotError> {
    fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let name = Local::now().format("scene-%Y%m%d-%H%M%S%.3f.json").to_string();
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(scene).map_err(|source| SnapshotError::Json {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| SnapshotError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("saved scene {} to {}", scene.seed, path.display());
    Ok(path)
}

/// Read a scene back, rejecting objects whose geometry breaks the scene's shape
/// rules and scenes whose per-kind object counts differ from a generated one.
pub fn load_scene(path: &Path) -> Result<Scene, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scene: Scene = serde_json::from_str(&json).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(index) = scene.objects().iter().position(|o| !is_well_formed(o)) {
        return Err(SnapshotError::InvalidObject {
            path: path.to_path_buf(),
            index,
        });
    }

    for (kind, expected) in MEMBERSHIP {
        let found = scene.count(kind);
        if found != expected {
            return Err(SnapshotError::WrongMembership {
                path: path.to_path_buf(),
                kind,
                expected,
                found,
            });
        }
    }

    log::info!("loaded scene {} ({} objects) from {}", scene.seed, scene.len(), path.display());
    Ok(scene)
}

fn is_well_formed(object: &SceneObject) -> bool {
    match object {
        SceneObject::Trace(trace) => matches!(trace.points.len(), 2 | 3),
        SceneObject::DataConnector(connector) => connector.samples.len() == CONNECTOR_SAMPLES,
        SceneObject::DeviceNode(_) => true,
    }
}
