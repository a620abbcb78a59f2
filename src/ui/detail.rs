// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Detail viewer for the active project.
//!
//! The whole panel lives under an id scope keyed by the active index, so a
//! new selection replaces the subtree instead of patching it and its
//! transitions start from hidden again.

use crate::models::project::Project;
use crate::ui::theme;
use crate::ui::transition::{self, Transition, TransitionClock};
use crate::util::geometry::fit_within;

/// Marker placed before each highlight.
pub const HIGHLIGHT_MARKER: &str = "→";

/// Largest thumbnail edge in points.
const THUMBNAIL_MAX: f32 = 480.0;

/// Everything the viewer renders for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Active index, used as the subtree key.
    pub key: usize,
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub image: String,
}

impl DetailView {
    pub fn from_project(index: usize, project: &Project) -> Self {
        Self {
            key: index,
            title: project.title.clone(),
            description: project.description.clone(),
            highlights: project.highlights.clone(),
            tags: project.tech.clone(),
            link: project.link().map(str::to_string),
            image: project.image.clone(),
        }
    }

    /// Subtree id for this selection.
    pub fn id(&self) -> egui::Id {
        egui::Id::new("detail").with(self.key)
    }
}

/// Loaded preview image for the active project.
pub struct Thumbnail {
    pub texture: egui::TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// Result of detail viewer interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    None,
    OpenLink(String),
}

/// Display the detail panel for `view`.
pub fn show(
    ui: &mut egui::Ui,
    view: &DetailView,
    thumbnail: Option<&Thumbnail>,
    clock: &mut TransitionClock,
) -> DetailAction {
    let now = ui.input(|i| i.time);
    let id = view.id();
    let fade = clock.state(id, &Transition::DETAIL_FADE, 0, 1, now);
    let slide = clock.state(id.with("slide"), &Transition::DETAIL_SLIDE, 0, 1, now);

    ui.push_id(id, |ui| {
        transition::show(ui, fade.combine(slide), |ui| {
            egui::Frame::none()
                .fill(theme::SECONDARY_FAINT)
                .stroke(egui::Stroke::new(1.0, theme::MUTED_BORDER))
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    body(ui, view, thumbnail)
                })
                .inner
        })
    })
    .inner
}

/// Placeholder when the catalog is empty.
pub fn show_empty(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new("No projects to show").color(theme::MUTED));
    });
}

fn body(ui: &mut egui::Ui, view: &DetailView, thumbnail: Option<&Thumbnail>) -> DetailAction {
    let mut action = DetailAction::None;

    ui.heading(egui::RichText::new(&view.title).strong().color(theme::LIGHT));
    ui.add_space(8.0);

    if let Some(thumb) = thumbnail {
        let max = THUMBNAIL_MAX.min(ui.available_width());
        let (width, height) = fit_within(thumb.width, thumb.height, max, max);
        ui.add(egui::Image::new(&thumb.texture).fit_to_exact_size(egui::vec2(width, height)))
            .on_hover_text(&view.image);
        ui.add_space(8.0);
    }

    ui.label(egui::RichText::new(&view.description).color(theme::MUTED));
    ui.add_space(16.0);

    section_heading(ui, "KEY HIGHLIGHTS");
    for highlight in &view.highlights {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(HIGHLIGHT_MARKER).color(theme::MUTED));
            ui.label(highlight);
        });
    }
    ui.add_space(16.0);

    section_heading(ui, "TECHNOLOGIES");
    ui.horizontal_wrapped(|ui| {
        for tag in &view.tags {
            egui::Frame::none()
                .fill(theme::PRIMARY)
                .stroke(egui::Stroke::new(1.0, theme::MUTED_BORDER))
                .rounding(2.0)
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(tag).small());
                });
        }
    });

    // Omitted entirely when there is no link.
    if let Some(url) = &view.link {
        ui.add_space(24.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            let button = egui::Button::new(egui::RichText::new("VIEW PROJECT ↗").monospace())
                .stroke(egui::Stroke::new(1.0, theme::LIGHT))
                .fill(egui::Color32::TRANSPARENT);
            if ui.add(button).on_hover_text(url).clicked() {
                action = DetailAction::OpenLink(url.clone());
            }
        });
    }

    action
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).monospace().small().color(theme::LIGHT));
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::catalog;

    #[test]
    fn test_view_matches_record() {
        for (index, project) in catalog().iter().enumerate() {
            let view = DetailView::from_project(index, project);
            assert_eq!(view.key, index);
            assert_eq!(view.title, project.title);
            assert_eq!(view.description, project.description);
            assert_eq!(view.highlights, project.highlights);
            assert_eq!(view.tags, project.tech);
        }
    }

    #[test]
    fn test_api_testing_tool_view() {
        let projects = catalog();
        let view = DetailView::from_project(2, &projects[2]);
        assert_eq!(view.title, "API Testing Tool");
        assert_eq!(view.highlights.len(), 6);
        assert_eq!(view.tags.len(), 7);
        assert_eq!(
            view.link.as_deref(),
            Some("https://api-testing-tool-five.vercel.app/")
        );
    }

    #[test]
    fn test_missing_link_omitted() {
        let mut project = catalog().remove(0);
        project.live_link = Some(String::new());
        assert_eq!(DetailView::from_project(0, &project).link, None);

        project.live_link = None;
        assert_eq!(DetailView::from_project(0, &project).link, None);
    }

    #[test]
    fn test_id_keyed_by_index() {
        let projects = catalog();
        let a = DetailView::from_project(0, &projects[0]);
        let b = DetailView::from_project(1, &projects[1]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), DetailView::from_project(0, &projects[0]).id());
    }
}
