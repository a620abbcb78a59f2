// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section header above the showcase.

use crate::ui::theme;
use crate::ui::transition::{self, Transition, TransitionClock};

/// Display the "Featured Projects" heading, fading in on first show.
pub fn show(ui: &mut egui::Ui, clock: &mut TransitionClock) {
    let now = ui.input(|i| i.time);
    let state = clock.state(egui::Id::new("header"), &Transition::HEADER, 0, 1, now);

    transition::show(ui, state, |ui| {
        ui.label(
            egui::RichText::new("PORTFOLIO")
                .monospace()
                .small()
                .color(theme::MUTED),
        );
        ui.label(
            egui::RichText::new("Featured Projects")
                .size(28.0)
                .strong()
                .color(theme::LIGHT),
        );
        ui.add_space(6.0);

        let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 2.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, rule_color());
    });
}

/// Colour of the short rule under the heading.
fn rule_color() -> egui::Color32 {
    theme::LIGHT.gamma_multiply(0.5)
}
