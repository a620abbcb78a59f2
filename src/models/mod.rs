// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: project records and the active selection.

pub mod project;
pub mod selection;
