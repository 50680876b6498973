//! Configuration for the circuitry background.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/circuitry/config.toml` on Linux). Every field is optional in
//! the file; missing ones take their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 120;

/// Errors raised while reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no home directory to place the config in")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed scene seed. `None` picks a new one from the clock at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Target frames per second.
    pub fps: u32,
    /// Width of one terminal cell in virtual pixels.
    pub cell_width_px: f32,
    /// Height of one terminal cell in virtual pixels.
    pub cell_height_px: f32,
    /// Enlargement of device node meshes.
    pub node_scale: f32,
    /// Drift the camera toward the mouse pointer.
    pub follow_pointer: bool,
    /// Show the key help line.
    pub show_help: bool,
    /// Saved scene to load instead of generating one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            fps: 30,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            node_scale: 2.5,
            follow_pointer: true,
            show_help: true,
            scene_file: None,
        }
    }
}

impl Config {
    /// Platform directories for circuitry.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "circuitry")
    }

    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text and normalise out-of-range values.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Write to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamp values the renderer cannot work with.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        if !(self.cell_width_px > 0.0) {
            self.cell_width_px = defaults.cell_width_px;
        }
        if !(self.cell_height_px > 0.0) {
            self.cell_height_px = defaults.cell_height_px;
        }
        if !(self.node_scale > 0.0) {
            self.node_scale = defaults.node_scale;
        }
        self
    }

    /// Time between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.fps.clamp(MIN_FPS, MAX_FPS))
    }
}
