// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read from a YAML file named by the `SHOWCASE_CONFIG`
//! environment variable. Every field is optional; anything missing falls
//! back to [`ShowcaseConfig::default`].
//!
//! ```yaml
//! window_width: 1280
//! window_height: 720
//! breakpoint: 768
//! animations: true
//! assets_dir: ./public
//! catalog_path: ./projects.yaml
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

/// Width below which the compact selector is used.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub breakpoint: f32,
    pub animations: bool,
    /// Root that record image paths are resolved against.
    pub assets_dir: Option<PathBuf>,
    /// Catalog file replacing the built-in project list.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            breakpoint: DEFAULT_BREAKPOINT,
            animations: true,
            assets_dir: None,
            catalog_path: None,
        }
    }
}

/// On-disk shape: all fields optional so partial files work.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    window_width: Option<f32>,
    window_height: Option<f32>,
    breakpoint: Option<f32>,
    animations: Option<bool>,
    assets_dir: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl ShowcaseConfig {
    /// Load from `SHOWCASE_CONFIG`, or defaults if it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Load from a YAML file, layering its values over the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        let file: FileConfig = if text.trim().is_empty() {
            FileConfig::default()
        } else {
            serde_yaml::from_str(text)?
        };
        let defaults = Self::default();

        Ok(Self {
            window_width: file.window_width.unwrap_or(defaults.window_width),
            window_height: file.window_height.unwrap_or(defaults.window_height),
            breakpoint: file.breakpoint.unwrap_or(defaults.breakpoint),
            animations: file.animations.unwrap_or(defaults.animations),
            assets_dir: file.assets_dir,
            catalog_path: file.catalog_path,
        })
    }
}
