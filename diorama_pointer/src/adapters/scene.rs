// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Diorama Scene.
//!
//! ## Feature
//!
//! Enable with `scene_adapter`.
//!
//! ## Notes
//!
//! These helpers run the scene's alpha-silhouette hit test and feed the
//! result into a [`HoverTracker`] keyed by [`ItemId`]. They add no policy
//! of their own: the tracker decides what the sample means, and while an
//! override is forced the hit test still runs but its output is discarded.

use alloc::vec::Vec;

use diorama_scene::{HitParams, ItemId, Scene};
use kurbo::Point;

use crate::hover::{HoverEvent, HoverTracker};

/// Run one pointer-move sample: hit test the scene at `screen`, feed the
/// tracker, and return the resulting highlight transitions.
pub fn sample_scene(
    scene: &Scene,
    params: &HitParams,
    tracker: &mut HoverTracker<ItemId>,
    screen: Point,
) -> Vec<HoverEvent<ItemId>> {
    tracker.sample(scene.hit_test(screen, params))
}

/// Force (or clear) the hover override by slug.
///
/// A slug that is `None` or not registered clears the override — a bad
/// external reference degrades to a clear rather than an error.
pub fn force_slug(
    scene: &Scene,
    tracker: &mut HoverTracker<ItemId>,
    slug: Option<&str>,
) -> Vec<HoverEvent<ItemId>> {
    tracker.force(slug.and_then(|s| scene.find_by_slug(s)))
}
