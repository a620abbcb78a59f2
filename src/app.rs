// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It owns the project catalog and the active
//! selection, and coordinates the selector and detail viewer.

use crate::config::ShowcaseConfig;
use crate::io::{media, serialization};
use crate::models::{
    project::{self, Project},
    selection::Selection,
};
use crate::ui::detail::{self, DetailAction, DetailView, Thumbnail};
use crate::ui::selector::{self, Layout, LayoutMode, SelectorAction};
use crate::ui::{header, transition::TransitionClock};
use std::collections::HashMap;
use std::path::Path;

/// Space between the selector column and the detail viewer.
const COLUMN_GAP: f32 = 32.0;

/// Build the catalog, from `config.catalog_path` if one is set.
pub fn load_catalog(config: &ShowcaseConfig) -> Vec<Project> {
    let Some(path) = &config.catalog_path else {
        return project::catalog();
    };

    match serialization::import(path) {
        Ok(projects) => {
            log::info!("Loaded {} projects from {}", projects.len(), path.display());
            projects
        }
        Err(e) => {
            log::warn!(
                "Failed to load catalog {}: {:#}; using built-in projects",
                path.display(),
                e
            );
            project::catalog()
        }
    }
}

/// Main application state.
pub struct ShowcaseApp {
    /// Project records, fixed for the lifetime of the app
    projects: Vec<Project>,

    /// Index of the project shown in the detail viewer
    selection: Selection,

    /// Selector layout override
    layout_mode: LayoutMode,

    /// Mount times for fade/slide transitions
    clock: TransitionClock,

    /// Per-project thumbnails; `None` once loading has failed
    thumbnails: HashMap<usize, Option<Thumbnail>>,

    config: ShowcaseConfig,
}

impl ShowcaseApp {
    /// Create a showcase over the configured catalog.
    pub fn new(config: ShowcaseConfig) -> Self {
        let projects = load_catalog(&config);
        Self::with_projects(config, projects)
    }

    pub fn with_projects(config: ShowcaseConfig, projects: Vec<Project>) -> Self {
        Self {
            selection: Selection::new(projects.len()),
            projects,
            layout_mode: LayoutMode::default(),
            clock: TransitionClock::new(config.animations),
            thumbnails: HashMap::new(),
            config,
        }
    }

    /// Make `index` the active project. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if self.selection.select(index) {
            // A fresh key each time so the viewer animates in again.
            if let Some(view) = self.active_view() {
                self.clock.remount(view.id());
                self.clock.remount(view.id().with("slide"));
            }
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Detail content for the active project.
    pub fn active_view(&self) -> Option<DetailView> {
        let index = self.selection.active()?;
        self.projects
            .get(index)
            .map(|project| DetailView::from_project(index, project))
    }

    /// Export the catalog to a file.
    fn export_catalog(&self, path: &Path) {
        match serialization::export(&self.projects, path) {
            Ok(_) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {:#}", e),
        }
    }

    /// Load the thumbnail for `index` on first use.
    fn ensure_thumbnail(&mut self, ctx: &egui::Context, index: usize) {
        if self.thumbnails.contains_key(&index) {
            return;
        }
        let (Some(assets_dir), Some(project)) = (&self.config.assets_dir, self.projects.get(index))
        else {
            return;
        };

        let path = media::resolve_image_path(assets_dir, &project.image);
        let thumbnail = match media::load_image(&path) {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture = ctx.load_texture(
                    format!("thumbnail-{}", index),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                log::info!("Loaded thumbnail: {} ({}x{})", path.display(), loaded.width, loaded.height);
                Some(Thumbnail {
                    texture,
                    width: loaded.width,
                    height: loaded.height,
                })
            }
            Err(e) => {
                log::warn!("No thumbnail for project {}: {:#}", index, e);
                None
            }
        };
        self.thumbnails.insert(index, thumbnail);
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.menu_button("Export Catalog", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("projects.yaml")
                                .save_file()
                            {
                                self.export_catalog(&path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("projects.json")
                                .save_file()
                            {
                                self.export_catalog(&path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.label("Selector layout");
                    ui.radio_value(&mut self.layout_mode, LayoutMode::Auto, "Auto");
                    ui.radio_value(&mut self.layout_mode, LayoutMode::Compact, "Compact");
                    ui.radio_value(&mut self.layout_mode, LayoutMode::Vertical, "Vertical");
                });
            });
        });
    }

    /// Draw one frame. Separate from `update` so it can run headless.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.clock.begin_frame();
        self.menu_bar(ctx);

        let layout = self
            .layout_mode
            .resolve(ctx.screen_rect().width(), self.config.breakpoint);
        let entries = selector::entries(self.projects(), self.selection());
        let view = self.active_view();
        if let Some(view) = &view {
            self.ensure_thumbnail(ctx, view.key);
        }

        let selection = &self.selection;
        let clock = &mut self.clock;
        let thumbnail = view
            .as_ref()
            .and_then(|v| self.thumbnails.get(&v.key))
            .and_then(Option::as_ref);

        let (selector_action, detail_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        header::show(ui, clock);
                        ui.add_space(24.0);

                        match layout {
                            Layout::Compact => {
                                let picked = selector::show(ui, &entries, selection, layout, clock);
                                ui.add_space(16.0);
                                let shown = show_detail(ui, view.as_ref(), thumbnail, clock);
                                (picked, shown)
                            }
                            Layout::Vertical => {
                                let total = ui.available_width();
                                let left = ((total - COLUMN_GAP) / 3.0).max(0.0);
                                ui.horizontal_top(|ui| {
                                    let picked = ui
                                        .allocate_ui_with_layout(
                                            egui::vec2(left, ui.available_height()),
                                            egui::Layout::top_down(egui::Align::LEFT),
                                            |ui| selector::show(ui, &entries, selection, layout, clock),
                                        )
                                        .inner;
                                    ui.add_space(COLUMN_GAP);
                                    let shown = ui
                                        .allocate_ui_with_layout(
                                            egui::vec2(ui.available_width(), ui.available_height()),
                                            egui::Layout::top_down(egui::Align::LEFT),
                                            |ui| show_detail(ui, view.as_ref(), thumbnail, clock),
                                        )
                                        .inner;
                                    (picked, shown)
                                })
                                .inner
                            }
                        }
                    })
                    .inner
            })
            .inner;

        // Handle selector actions
        match selector_action {
            SelectorAction::Select(index) => self.select(index),
            SelectorAction::None => {}
        }

        // Handle detail viewer actions
        match detail_action {
            DetailAction::OpenLink(url) => {
                log::info!("Opening {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            DetailAction::None => {}
        }

        if self.clock.needs_repaint() {
            ctx.request_repaint();
        }
    }
}

fn show_detail(
    ui: &mut egui::Ui,
    view: Option<&DetailView>,
    thumbnail: Option<&Thumbnail>,
    clock: &mut TransitionClock,
) -> DetailAction {
    match view {
        Some(view) => detail::show(ui, view, thumbnail, clock),
        None => {
            detail::show_empty(ui);
            DetailAction::None
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme;

    fn run_frame(app: &mut ShowcaseApp, ctx: &egui::Context, width: f32) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 800.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn app() -> ShowcaseApp {
        ShowcaseApp::new(ShowcaseConfig::default())
    }

    #[test]
    fn test_initial_view_is_first_project() {
        let app = app();
        let view = app.active_view().unwrap();
        assert_eq!(view.key, 0);
        assert_eq!(view.title, "SoundNest – Music Streaming Platform");
    }

    #[test]
    fn test_select_shows_record() {
        let mut app = app();
        for index in 0..app.projects().len() {
            app.select(index);
            let view = app.active_view().unwrap();
            let project = &app.projects()[index];
            assert_eq!(view.title, project.title);
            assert_eq!(view.description, project.description);
            assert_eq!(view.highlights, project.highlights);
            assert_eq!(view.tags, project.tech);
        }
    }

    #[test]
    fn test_select_api_testing_tool() {
        let mut app = app();
        app.select(2);
        let view = app.active_view().unwrap();
        assert_eq!(view.title, "API Testing Tool");
        assert_eq!(view.highlights.len(), 6);
        assert_eq!(view.tags.len(), 7);
        assert_eq!(
            view.link.as_deref(),
            Some("https://api-testing-tool-five.vercel.app/")
        );
    }

    #[test]
    fn test_last_selection_wins() {
        let mut app = app();
        app.select(1);
        app.select(0);
        assert_eq!(
            app.active_view().unwrap().title,
            "SoundNest – Music Streaming Platform"
        );
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut app = app();
        app.select(1);
        app.select(42);
        assert_eq!(app.selection().active(), Some(1));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = app();
        let b = app();
        a.select(2);
        assert_eq!(a.selection().active(), Some(2));
        assert_eq!(b.selection().active(), Some(0));
    }

    fn still_app(projects: Vec<Project>) -> ShowcaseApp {
        let config = ShowcaseConfig {
            animations: false,
            ..ShowcaseConfig::default()
        };
        ShowcaseApp::with_projects(config, projects)
    }

    fn frame(
        app: &mut ShowcaseApp,
        ctx: &egui::Context,
        width: f32,
        events: Vec<egui::Event>,
    ) -> egui::FullOutput {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 1400.0),
            )),
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| app.ui(ctx))
    }

    fn collect_shapes(
        shape: &egui::Shape,
        texts: &mut Vec<(String, egui::Rect, egui::Color32)>,
        fills: &mut Vec<(egui::Rect, egui::Color32)>,
    ) {
        match shape {
            egui::Shape::Text(text) => {
                let color = text
                    .galley
                    .job
                    .sections
                    .first()
                    .map_or(egui::Color32::PLACEHOLDER, |s| s.format.color);
                texts.push((
                    text.galley.text().to_string(),
                    egui::Rect::from_min_size(text.pos, text.galley.size()),
                    color,
                ));
            }
            egui::Shape::Rect(rect) => fills.push((rect.rect, rect.fill)),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_shapes(shape, texts, fills);
                }
            }
            _ => {}
        }
    }

    /// Text shapes drawn in a frame: (text, rect, colour).
    fn texts(output: &egui::FullOutput) -> Vec<(String, egui::Rect, egui::Color32)> {
        let mut texts = Vec::new();
        let mut fills = Vec::new();
        for clipped in &output.shapes {
            collect_shapes(&clipped.shape, &mut texts, &mut fills);
        }
        texts
    }

    fn fills(output: &egui::FullOutput) -> Vec<(egui::Rect, egui::Color32)> {
        let mut texts = Vec::new();
        let mut fills = Vec::new();
        for clipped in &output.shapes {
            collect_shapes(&clipped.shape, &mut texts, &mut fills);
        }
        fills
    }

    fn text_center(output: &egui::FullOutput, text: &str) -> egui::Pos2 {
        texts(output)
            .into_iter()
            .find(|(t, _, _)| t == text)
            .map(|(_, rect, _)| rect.center())
            .unwrap_or_else(|| panic!("{:?} not drawn", text))
    }

    fn click(app: &mut ShowcaseApp, ctx: &egui::Context, width: f32, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        let _ = frame(app, ctx, width, vec![egui::Event::PointerMoved(pos)]);
        let _ = frame(app, ctx, width, vec![button(true)]);
        let _ = frame(app, ctx, width, vec![button(false)]);
    }

    #[test]
    fn test_click_vertical_row_selects() {
        let mut app = still_app(project::catalog());
        let ctx = egui::Context::default();

        let output = frame(&mut app, &ctx, 1280.0, Vec::new());
        let pos = text_center(&output, "API Testing Tool");
        click(&mut app, &ctx, 1280.0, pos);

        assert_eq!(app.selection().active(), Some(2));
        assert_eq!(app.active_view().unwrap().title, "API Testing Tool");
    }

    #[test]
    fn test_click_compact_card_selects() {
        let mut app = still_app(project::catalog());
        let ctx = egui::Context::default();

        let output = frame(&mut app, &ctx, 600.0, Vec::new());
        let pos = text_center(&output, "Custom Portfolio CMS");
        click(&mut app, &ctx, 600.0, pos);

        assert_eq!(app.selection().active(), Some(1));
    }

    #[test]
    fn test_layouts_highlight_active_entry() {
        for width in [600.0, 1280.0] {
            let mut app = still_app(project::catalog());
            app.select(1);
            let ctx = egui::Context::default();
            let drawn = texts(&frame(&mut app, &ctx, width, Vec::new()));

            let colors = |title: &str| -> Vec<egui::Color32> {
                drawn
                    .iter()
                    .filter(|(t, _, _)| t == title)
                    .map(|(_, _, c)| *c)
                    .collect()
            };

            // Project 0 only appears in the selector, project 1 in both.
            let inactive = colors("SoundNest – Music Streaming Platform");
            let active = colors("Custom Portfolio CMS");
            assert!(!inactive.is_empty(), "width {}", width);
            assert!(!active.is_empty(), "width {}", width);
            assert!(inactive.iter().all(|c| *c == theme::MUTED), "width {}", width);
            assert!(active.iter().all(|c| *c == theme::LIGHT), "width {}", width);
        }
    }

    #[test]
    fn test_hovered_row_is_tinted() {
        let mut app = still_app(project::catalog());
        let ctx = egui::Context::default();

        let output = frame(&mut app, &ctx, 1280.0, Vec::new());
        assert!(fills(&output).iter().all(|(_, c)| *c != theme::HOVER));
        let pos = text_center(&output, "API Testing Tool");

        let _ = frame(&mut app, &ctx, 1280.0, vec![egui::Event::PointerMoved(pos)]);
        let output = frame(&mut app, &ctx, 1280.0, Vec::new());

        assert!(fills(&output)
            .iter()
            .any(|(rect, c)| *c == theme::HOVER && rect.contains(pos)));
        assert_eq!(app.selection().active(), Some(0));
    }

    #[test]
    fn test_link_button_only_with_link() {
        let has_button = |drawn: &[(String, egui::Rect, egui::Color32)]| {
            drawn.iter().any(|(t, _, _)| t.contains("VIEW PROJECT"))
        };

        let mut app = still_app(project::catalog());
        app.select(2);
        let drawn = texts(&frame(&mut app, &egui::Context::default(), 1280.0, Vec::new()));
        assert!(has_button(&drawn));

        let mut unlinked = project::catalog().remove(2);
        unlinked.live_link = None;
        let mut app = still_app(vec![unlinked]);
        let drawn = texts(&frame(&mut app, &egui::Context::default(), 1280.0, Vec::new()));
        assert!(drawn.iter().any(|(t, _, _)| t == "API Testing Tool"));
        assert!(!has_button(&drawn));
    }

    #[test]
    fn test_frames_render_headless() {
        let mut app = app();
        let ctx = egui::Context::default();
        for width in [400.0, 1280.0] {
            for index in 0..3 {
                app.select(index);
                run_frame(&mut app, &ctx, width);
            }
        }
        assert_eq!(app.selection().active(), Some(2));
    }

    #[test]
    fn test_animation_requests_repaint() {
        let mut app = app();
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx, 1280.0);
        assert!(app.clock.needs_repaint());

        let config = ShowcaseConfig {
            animations: false,
            ..ShowcaseConfig::default()
        };
        let mut still = ShowcaseApp::new(config);
        run_frame(&mut still, &ctx, 1280.0);
        assert!(!still.clock.needs_repaint());
    }

    #[test]
    fn test_empty_catalog() {
        let mut app = ShowcaseApp::with_projects(ShowcaseConfig::default(), Vec::new());
        assert!(app.active_view().is_none());
        app.select(0);
        run_frame(&mut app, &egui::Context::default(), 1280.0);
        assert_eq!(app.selection().len(), 0);
    }

    #[test]
    fn test_catalog_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let subset: Vec<Project> = project::catalog().into_iter().skip(2).collect();
        serialization::export_json(&subset, &path).unwrap();

        let config = ShowcaseConfig {
            catalog_path: Some(path),
            ..ShowcaseConfig::default()
        };
        let projects = load_catalog(&config);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "API Testing Tool");
    }

    #[test]
    fn test_catalog_path_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShowcaseConfig {
            catalog_path: Some(dir.path().join("missing.yaml")),
            ..ShowcaseConfig::default()
        };
        assert_eq!(load_catalog(&config), project::catalog());
    }

    #[test]
    fn test_thumbnail_loading() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir(&images).unwrap();
        image::RgbaImage::from_pixel(8, 4, image::Rgba([200, 100, 50, 255]))
            .save(images.join("soundnest-preview.png"))
            .unwrap();

        let config = ShowcaseConfig {
            assets_dir: Some(dir.path().to_path_buf()),
            ..ShowcaseConfig::default()
        };
        let mut app = ShowcaseApp::new(config);
        let ctx = egui::Context::default();

        run_frame(&mut app, &ctx, 1280.0);
        let thumb = app.thumbnails.get(&0).unwrap().as_ref().unwrap();
        assert_eq!((thumb.width, thumb.height), (8, 4));

        // No preview on disk for the second project.
        app.select(1);
        run_frame(&mut app, &ctx, 1280.0);
        assert!(app.thumbnails.get(&1).unwrap().is_none());
    }
}
