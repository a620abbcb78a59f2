// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project selector list.
//!
//! Two layouts render the same entries: a horizontally scrolling row of
//! cards for narrow windows and a vertical list for wide ones. Both read
//! the active flag from the same [`Selection`], so they always agree on
//! which entry is highlighted.

use crate::models::{project::Project, selection::Selection};
use crate::ui::theme;
use crate::ui::transition::{self, Transition, TransitionClock};
use crate::util::geometry::compact_card_width;

/// One row of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub index: usize,
    pub title: String,
    pub summary: String,
    pub active: bool,
}

/// Build the selector rows in catalog order.
pub fn entries(projects: &[Project], selection: &Selection) -> Vec<SelectorEntry> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| SelectorEntry {
            index,
            title: project.selector_title().to_string(),
            summary: project.tech_summary(),
            active: selection.is_active(index),
        })
        .collect()
}

/// `"2/3"` style position counter shown above the compact row.
pub fn position_label(selection: &Selection) -> String {
    match selection.active() {
        Some(active) => format!("{}/{}", active + 1, selection.len()),
        None => format!("0/{}", selection.len()),
    }
}

/// Which selector rendering to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Compact,
    Vertical,
}

impl Layout {
    /// Narrow windows get the compact row.
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Layout::Compact
        } else {
            Layout::Vertical
        }
    }
}

/// User override from the View menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Auto,
    Compact,
    Vertical,
}

impl LayoutMode {
    pub fn resolve(self, width: f32, breakpoint: f32) -> Layout {
        match self {
            LayoutMode::Auto => Layout::for_width(width, breakpoint),
            LayoutMode::Compact => Layout::Compact,
            LayoutMode::Vertical => Layout::Vertical,
        }
    }
}

/// Result of selector interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    None,
    Select(usize),
}

/// Display the selector and report which entry was clicked.
pub fn show(
    ui: &mut egui::Ui,
    entries: &[SelectorEntry],
    selection: &Selection,
    layout: Layout,
    clock: &mut TransitionClock,
) -> SelectorAction {
    let now = ui.input(|i| i.time);
    let id = egui::Id::new("selector").with(layout_key(layout));

    match layout {
        Layout::Compact => show_compact(ui, entries, selection, id, clock, now),
        Layout::Vertical => show_vertical(ui, entries, id, clock, now),
    }
}

fn layout_key(layout: Layout) -> &'static str {
    match layout {
        Layout::Compact => "compact",
        Layout::Vertical => "vertical",
    }
}

fn show_compact(
    ui: &mut egui::Ui,
    entries: &[SelectorEntry],
    selection: &Selection,
    id: egui::Id,
    clock: &mut TransitionClock,
    now: f64,
) -> SelectorAction {
    let mut action = SelectorAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("SELECT PROJECT").small().color(theme::MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(position_label(selection))
                    .small()
                    .color(theme::MUTED),
            );
        });
    });
    ui.add_space(6.0);

    let card_width = compact_card_width(ui.available_width());

    egui::ScrollArea::horizontal()
        .id_source(id)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for entry in entries {
                    let state = clock.state(
                        id,
                        &Transition::SELECTOR_ITEMS,
                        entry.index,
                        entries.len(),
                        now,
                    );
                    let response = ui
                        .vertical(|ui| {
                            let response =
                                transition::show(ui, state, |ui| card(ui, entry, card_width));
                            // Keep the row height fixed while cards slide.
                            let travel = Transition::SELECTOR_ITEMS.hidden.offset_y;
                            ui.allocate_space(egui::vec2(0.0, travel));
                            response
                        })
                        .inner;
                    if response.clicked() {
                        action = SelectorAction::Select(entry.index);
                    }
                }
            });
        });

    action
}

fn show_vertical(
    ui: &mut egui::Ui,
    entries: &[SelectorEntry],
    id: egui::Id,
    clock: &mut TransitionClock,
    now: f64,
) -> SelectorAction {
    let mut action = SelectorAction::None;
    let width = ui.available_width();

    for entry in entries {
        let state = clock.state(
            id,
            &Transition::SELECTOR_ITEMS,
            entry.index,
            entries.len(),
            now,
        );
        let response = transition::show(ui, state, |ui| row(ui, entry, width));
        if response.clicked() {
            action = SelectorAction::Select(entry.index);
        }
    }

    action
}

/// Compact card with a full border.
fn card(ui: &mut egui::Ui, entry: &SelectorEntry, width: f32) -> egui::Response {
    let (fill, stroke) = if entry.active {
        (theme::SECONDARY_STRONG, theme::LIGHT_BORDER)
    } else {
        (theme::SECONDARY_FAINT, theme::MUTED_BORDER)
    };

    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width((width - 24.0).max(0.0));
            entry_text(ui, entry);
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Background of a vertical row.
pub fn row_fill(active: bool, hovered: bool) -> egui::Color32 {
    if active {
        theme::SECONDARY_STRONG
    } else if hovered {
        theme::HOVER
    } else {
        egui::Color32::TRANSPARENT
    }
}

/// Vertical row with a left accent bar.
fn row(ui: &mut egui::Ui, entry: &SelectorEntry, width: f32) -> egui::Response {
    let accent = if entry.active {
        theme::MUTED
    } else {
        theme::MUTED_BORDER
    };

    // Filled in once hover is known, drawn beneath the text.
    let background = ui.painter().add(egui::Shape::Noop);

    let inner = egui::Frame::none()
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width((width - 24.0).max(0.0));
            entry_text(ui, entry);
        });

    let rect = inner.response.rect;
    let response = inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    ui.painter().set(
        background,
        egui::Shape::rect_filled(rect, 0.0, row_fill(entry.active, response.hovered())),
    );
    ui.painter().line_segment(
        [rect.left_top(), rect.left_bottom()],
        egui::Stroke::new(1.0, accent),
    );

    response
}

fn entry_text(ui: &mut egui::Ui, entry: &SelectorEntry) {
    let title_color = if entry.active { theme::LIGHT } else { theme::MUTED };
    ui.label(egui::RichText::new(&entry.title).strong().color(title_color));
    ui.add(
        egui::Label::new(egui::RichText::new(&entry.summary).small().color(theme::MUTED))
            .truncate(),
    );
}
