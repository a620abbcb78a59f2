// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the showcase.

pub mod detail;
pub mod header;
pub mod selector;
pub mod theme;
pub mod transition;
