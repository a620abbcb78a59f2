// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog serialization and deserialization.
//!
//! This module handles exporting and importing the project catalog in YAML
//! and JSON formats.

use crate::models::project::Project;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export the catalog to YAML format.
pub fn export_yaml(projects: &[Project], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(projects)?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export the catalog to JSON format.
pub fn export_json(projects: &[Project], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(projects)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a catalog from YAML format.
pub fn import_yaml(path: &Path) -> Result<Vec<Project>> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let projects = serde_yaml::from_str(&yaml)?;
    Ok(projects)
}

/// Import a catalog from JSON format.
pub fn import_json(path: &Path) -> Result<Vec<Project>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let projects = serde_json::from_str(&json)?;
    Ok(projects)
}

/// Export using the format implied by the file extension.
pub fn export(projects: &[Project], path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(projects, path),
        Some("json") => export_json(projects, path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}

/// Import using the format implied by the file extension.
pub fn import(path: &Path) -> Result<Vec<Project>> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}
