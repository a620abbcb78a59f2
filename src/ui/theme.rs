// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Colour palette and global visuals.

use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(10, 10, 10);
pub const SECONDARY: Color32 = Color32::from_rgb(26, 26, 26);
pub const LIGHT: Color32 = Color32::from_rgb(240, 240, 240);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

// Premultiplied translucent variants of the above.
pub const SECONDARY_STRONG: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 128);
pub const SECONDARY_FAINT: Color32 = Color32::from_rgba_premultiplied(3, 3, 3, 26);
pub const LIGHT_BORDER: Color32 = Color32::from_rgba_premultiplied(48, 48, 48, 51);
pub const MUTED_BORDER: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 26);
/// `SECONDARY` at 30% for hovered rows.
pub const HOVER: Color32 = Color32::from_rgba_premultiplied(8, 8, 8, 77);

/// Install the dark palette on `ctx`.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PRIMARY;
    visuals.window_fill = SECONDARY;
    visuals.extreme_bg_color = PRIMARY;
    visuals.hyperlink_color = LIGHT;
    ctx.set_visuals(visuals);
}
