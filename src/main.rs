// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Showcase - portfolio project viewer
//!
//! A desktop view of a portfolio's featured projects: a selectable project
//! list beside a detail panel with description, highlights and technologies.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::ShowcaseApp;
use config::ShowcaseConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = ShowcaseConfig::from_env()?;
    log::info!(
        "Starting showcase ({}x{}, breakpoint {})",
        config.window_width,
        config.window_height,
        config.breakpoint
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Featured Projects"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Showcase",
        options,
        Box::new(|cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(ShowcaseApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
