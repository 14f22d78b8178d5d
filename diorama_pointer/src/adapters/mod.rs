// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional adapters for picker crates.

#[cfg(feature = "scene_adapter")]
pub mod scene;
