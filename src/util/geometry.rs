// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Sizing helpers for laying out thumbnails and selector cards.

/// Scale `(width, height)` to fit inside `(max_width, max_height)`,
/// preserving the aspect ratio. Never scales up.
pub fn fit_within(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width == 0 || height == 0 || max_width <= 0.0 || max_height <= 0.0 {
        return (0.0, 0.0);
    }

    let img_width = width as f32;
    let img_height = height as f32;
    let scale = (max_width / img_width).min(max_height / img_height).min(1.0);

    (img_width * scale, img_height * scale)
}

/// Width of one card in the compact selector: a fraction of the visible
/// row so the next card peeks in.
pub fn compact_card_width(available_width: f32) -> f32 {
    (available_width * 0.75).max(0.0)
}
