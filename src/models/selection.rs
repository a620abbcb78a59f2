// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Active project selection.
//!
//! Holds the index of the project shown in the detail viewer. The index is
//! owned by one app instance and only changes through [`Selection::select`].

/// Index of the active project within a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    active: usize,
    len: usize,
}

impl Selection {
    /// Create a selection over `len` projects, starting at the first one.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Make `index` the active project.
    ///
    /// Out-of-range indices are ignored. Returns `true` if the active
    /// index changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::warn!("Ignoring selection {} (only {} projects)", index, self.len);
            return false;
        }
        if index == self.active {
            return false;
        }
        log::debug!("Selected project {} (was {})", index, self.active);
        self.active = index;
        true
    }

    /// The active index, or `None` if there is nothing to select.
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }
}
