// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fade and slide-in transitions.
//!
//! A [`Transition`] describes how a subtree moves from a hidden to a
//! visible [`Variant`]. The [`TransitionClock`] remembers when each keyed
//! subtree first appeared so the state can be computed on any frame.
//! Nothing here feeds back into selection: content is always the current
//! record, only its opacity and offset vary.

use std::collections::HashMap;

/// Visual properties a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f32,
    /// Downward offset in points.
    pub offset_y: f32,
}

impl Variant {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: 20.0,
    };

    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Stack two variants applied to the same subtree.
    pub fn combine(self, other: Self) -> Self {
        Self {
            opacity: self.opacity * other.opacity,
            offset_y: self.offset_y + other.offset_y,
        }
    }

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
        }
    }
}

/// Timing and endpoints of one transition. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub hidden: Variant,
    pub visible: Variant,
    pub duration: f32,
    pub delay: f32,
    /// Extra delay per sibling index.
    pub stagger: f32,
}

impl Transition {
    /// Section header: fade and rise once.
    pub const HEADER: Self = Self {
        hidden: Variant::HIDDEN,
        visible: Variant::VISIBLE,
        duration: 0.6,
        delay: 0.0,
        stagger: 0.0,
    };

    /// Selector entries, staggered 0.2s apart.
    pub const SELECTOR_ITEMS: Self = Self {
        hidden: Variant::HIDDEN,
        visible: Variant::VISIBLE,
        duration: 0.3,
        delay: 0.0,
        stagger: 0.2,
    };

    /// Detail panel fade on every selection.
    pub const DETAIL_FADE: Self = Self {
        hidden: Variant {
            opacity: 0.0,
            offset_y: 0.0,
        },
        visible: Variant::VISIBLE,
        duration: 0.5,
        delay: 0.0,
        stagger: 0.0,
    };

    /// Detail card slide, slightly behind the fade.
    pub const DETAIL_SLIDE: Self = Self {
        hidden: Variant {
            opacity: 1.0,
            offset_y: 20.0,
        },
        visible: Variant::VISIBLE,
        duration: 0.4,
        delay: 0.1,
        stagger: 0.0,
    };

    /// State `elapsed` seconds after mount for the `child`-th sibling.
    pub fn state_at(&self, elapsed: f32, child: usize) -> Variant {
        let start = self.delay + self.stagger * child as f32;
        let t = if self.duration <= 0.0 {
            if elapsed >= start {
                1.0
            } else {
                0.0
            }
        } else {
            ((elapsed - start) / self.duration).clamp(0.0, 1.0)
        };
        Variant::lerp(self.hidden, self.visible, t)
    }

    /// Seconds until the last of `children` siblings settles.
    pub fn total_time(&self, children: usize) -> f32 {
        self.delay + self.stagger * children.saturating_sub(1) as f32 + self.duration
    }
}

/// Mount times of keyed subtrees, in egui input time.
#[derive(Debug, Default)]
pub struct TransitionClock {
    enabled: bool,
    mounted: HashMap<egui::Id, f64>,
    animating: bool,
}

impl TransitionClock {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            mounted: HashMap::new(),
            animating: false,
        }
    }

    /// Start of a new frame: clear the repaint request.
    pub fn begin_frame(&mut self) {
        self.animating = false;
    }

    /// Current state of `transition` for subtree `key`.
    ///
    /// The first call for a key records its mount time. While any
    /// transition is still running, [`Self::needs_repaint`] is set.
    pub fn state(
        &mut self,
        key: egui::Id,
        transition: &Transition,
        child: usize,
        children: usize,
        now: f64,
    ) -> Variant {
        if !self.enabled {
            return transition.visible;
        }

        let mounted = *self.mounted.entry(key).or_insert(now);
        let elapsed = (now - mounted).max(0.0) as f32;
        if elapsed < transition.total_time(children.max(1)) {
            self.animating = true;
        }
        transition.state_at(elapsed, child)
    }

    /// Forget a subtree so the next appearance animates again.
    pub fn remount(&mut self, key: egui::Id) {
        self.mounted.remove(&key);
    }

    pub fn needs_repaint(&self) -> bool {
        self.animating
    }
}

/// Show `add_contents` in `state`. `ui` must lay out top-down.
///
/// The offset moves the contents only: the cursor is restored afterwards,
/// so siblings below keep their position while the slide runs.
pub fn show<R>(
    ui: &mut egui::Ui,
    state: Variant,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.add_space(state.offset_y);
    let inner = ui
        .scope(|ui| {
            ui.set_opacity(state.opacity);
            add_contents(ui)
        })
        .inner;
    ui.add_space(-state.offset_y);
    inner
}
