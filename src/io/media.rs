// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Thumbnail loading.
//!
//! This module loads project preview images from disk and converts them to
//! RGBA pixels suitable for an egui texture.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Decoded image ready for upload as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file as RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Map a record's web-style image path (`/images/x.png`) into `assets_dir`.
pub fn resolve_image_path(assets_dir: &Path, image: &str) -> PathBuf {
    assets_dir.join(image.trim_start_matches('/'))
}
